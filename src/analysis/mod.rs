/*!
 * Text analysis components.
 *
 * Each component is a pure function of (scene text, configuration), which is
 * what makes chunked reprocessing reproduce single-pass output exactly:
 *
 * - `segmenter`: splits normalized text into bounded scenes
 * - `characters`: detects and tiers character names
 * - `shots`: derives per-scene image prompts
 * - `narration`: derives per-scene narration metadata
 * - `sfx`: derives per-scene sound cues
 */

pub use self::characters::CharacterRegistry;
pub use self::narration::NarrationAnalyzer;
pub use self::segmenter::SceneSegmenter;
pub use self::sfx::{SfxCueGenerator, SfxKeywordEntry, SfxKeywordTable};
pub use self::shots::ShotPlanner;

pub mod characters;
pub mod narration;
pub mod segmenter;
pub mod sfx;
pub mod shots;
