/*!
 * Production plan data model.
 *
 * These types are the JSON-shaped contract consumed by downstream image,
 * voice, audio and video generators.
 */

pub use self::model::{
    Character, CharacterTier, ConfigEcho, ImagePrompt, NarrationSegment, ProductionPlan, Scene,
    SceneSfx, SfxCue, narration_id, scene_id, sfx_id, shot_id,
};

pub mod model;
