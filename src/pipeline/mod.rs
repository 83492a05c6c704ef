/*!
 * Single-pass analysis pipeline.
 */

pub use self::orchestrator::Orchestrator;

pub mod orchestrator;
