/*!
 * # Cineplan - Novel to Production Plan
 *
 * A Rust library that turns raw novel text into a deterministic multi-track
 * production plan for automated video generation.
 *
 * ## Features
 *
 * - Normalize and segment novel text into bounded scenes
 * - Detect and tier character names by cumulative mention counts
 * - Derive per-scene image prompts, narration metadata and SFX cues
 * - Split very large novels into word-budgeted chunks and merge the
 *   per-chunk results back into one plan, identical to a single-pass run
 * - Emit six JSON outputs consumable by downstream generators
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text`: Input normalization and sentence utilities
 * - `plan`: The production plan data model
 * - `analysis`: Scene segmentation, characters, shots, narration, SFX
 * - `pipeline`: The single-pass orchestrator
 * - `chunking`: Splitter, iterator and merger for large inputs
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod chunking;
pub mod errors;
pub mod file_utils;
pub mod pipeline;
pub mod plan;
pub mod text;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use chunking::{Chunk, ChunkMerger, ChunkSplitter, MergeState, next_chunk};
pub use errors::{AppError, ChunkError, SourceError, ValidationError};
pub use pipeline::Orchestrator;
pub use plan::{Character, CharacterTier, ProductionPlan};
