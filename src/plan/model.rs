/*!
 * Core data model for the production plan.
 *
 * A `ProductionPlan` bundles the six JSON-shaped outputs: scenes, per-scene
 * image prompts, narration metadata, SFX cues, the character registry and a
 * configuration echo. Records are immutable once emitted; the chunk merger is
 * the only place indices and ids are rewritten, and it does so by rebuilding
 * records rather than mutating them in place.
 */

use serde::{Deserialize, Serialize};

use crate::app_config::Config;

/// Build a scene id from a 0-based index ("scene_001" for index 0).
pub fn scene_id(index: usize) -> String {
    format!("scene_{:03}", index + 1)
}

/// Build a shot id from 0-based scene and shot indices.
pub fn shot_id(scene_idx: usize, shot_idx: usize) -> String {
    format!("scene_{:03}_shot_{:02}", scene_idx + 1, shot_idx + 1)
}

/// Build a narration id from a 0-based scene index.
pub fn narration_id(scene_idx: usize) -> String {
    format!("narration_scene_{:03}", scene_idx + 1)
}

/// Build an SFX id from a 0-based scene index.
pub fn sfx_id(scene_idx: usize) -> String {
    format!("sfx_scene_{:03}", scene_idx + 1)
}

/// A contiguous, bounded span of novel text treated as one narrative unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Stable identifier derived from the index
    pub id: String,

    /// Global, contiguous, 0-based position in the plan
    pub index: usize,

    /// Scene text (paragraphs joined by blank lines)
    pub text: String,
}

impl Scene {
    /// Create a scene at the given index.
    pub fn new(index: usize, text: String) -> Self {
        Self {
            id: scene_id(index),
            index,
            text,
        }
    }

    /// Rebuild the scene at a new global index, keeping its text.
    pub fn reindexed(&self, index: usize) -> Self {
        Self::new(index, self.text.clone())
    }
}

/// One image prompt (shot) associated with a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompt {
    /// Positive prompt text
    pub prompt: String,

    /// Fixed per-style negative prompt
    pub negative_prompt: String,

    /// 0-based index of the owning scene
    pub scene_idx: usize,

    /// 0-based position within the scene, contiguous
    pub shot_idx: usize,

    /// Shot type drawn from the fixed palette
    pub shot_type: String,

    /// Stable identifier derived from both indices
    pub id: String,
}

impl ImagePrompt {
    /// Rebuild the prompt under a new global scene index.
    pub fn with_scene_idx(&self, scene_idx: usize) -> Self {
        Self {
            scene_idx,
            id: shot_id(scene_idx, self.shot_idx),
            ..self.clone()
        }
    }
}

/// Narration metadata for a scene, ready for a TTS generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationSegment {
    /// Narration text (the scene text)
    pub text: String,

    /// 0-based index of the owning scene
    pub scene_idx: usize,

    /// Stable identifier derived from the scene index
    pub id: String,

    /// Whitespace-delimited token count
    pub word_count: usize,

    /// word_count / words_per_minute * 60, rounded to one decimal
    pub estimated_duration_seconds: f64,

    /// Share of words spoken inside double quotes, rounded to two decimals
    pub dialogue_ratio: f64,

    /// Whether any dialogue word was found
    pub has_dialogue: bool,
}

impl NarrationSegment {
    /// Rebuild the segment under a new global scene index.
    pub fn with_scene_idx(&self, scene_idx: usize) -> Self {
        Self {
            scene_idx,
            id: narration_id(scene_idx),
            ..self.clone()
        }
    }
}

/// A single sound-effect cue matched in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfxCue {
    /// The matched keyword
    pub keyword: String,

    /// Candidate prompts for this keyword, from the keyword table
    pub sfx_prompts: Vec<String>,

    /// Static priority from the keyword table
    pub priority: u32,

    /// First candidate prompt, used when building the combined prompt
    pub primary_prompt: String,
}

/// All sound cues derived for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSfx {
    /// Cues ordered by priority, ties by first occurrence in text
    pub cues: Vec<SfxCue>,

    /// Primary prompts of the top cues, comma-joined; empty when no matches
    pub combined_prompt: String,

    /// 0-based index of the owning scene
    pub scene_idx: usize,

    /// Stable identifier derived from the scene index
    pub id: String,

    /// Number of distinct matched keywords
    pub cue_count: usize,
}

impl SceneSfx {
    /// Rebuild the record under a new global scene index.
    pub fn with_scene_idx(&self, scene_idx: usize) -> Self {
        Self {
            scene_idx,
            id: sfx_id(scene_idx),
            ..self.clone()
        }
    }
}

/// A character's reference-richness class, derived from cumulative mentions.
///
/// Tiers are always recomputed from the current count and never stored
/// independently of it, so merging chunk counts needs no reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterTier {
    Main,
    Supporting,
    Minor,
    Background,
}

impl CharacterTier {
    /// Classify a cumulative mention count.
    pub fn for_mentions(count: usize) -> Self {
        if count >= 20 {
            Self::Main
        } else if count >= 5 {
            Self::Supporting
        } else if count >= 2 {
            Self::Minor
        } else {
            Self::Background
        }
    }

    /// Number of reference images the tier warrants
    /// (front, three-quarter and profile views for main characters).
    pub fn reference_count(&self) -> usize {
        match self {
            Self::Main => 3,
            Self::Supporting => 2,
            Self::Minor => 1,
            Self::Background => 0,
        }
    }
}

impl std::fmt::Display for CharacterTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Main => "main",
            Self::Supporting => "supporting",
            Self::Minor => "minor",
            Self::Background => "background",
        };
        write!(f, "{}", s)
    }
}

/// A detected character with its cumulative mention count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// First-seen casing of the name
    pub canonical_name: String,

    /// Cumulative mentions across every observed scene
    pub mention_count: usize,

    /// Tier derived from the mention count
    pub tier: CharacterTier,

    /// Reference images the tier warrants
    pub reference_count: usize,
}

impl Character {
    /// Build a character record, deriving tier and reference count.
    pub fn from_mentions(canonical_name: String, mention_count: usize) -> Self {
        let tier = CharacterTier::for_mentions(mention_count);
        Self {
            canonical_name,
            mention_count,
            tier,
            reference_count: tier.reference_count(),
        }
    }
}

/// Echo of every recognized configuration option plus derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEcho {
    pub max_scene_chars: usize,
    pub broll_density: usize,
    pub image_engine: String,
    pub image_style: String,
    pub character_profile: Vec<String>,
    pub voice_mode: String,
    pub sfx_mode: String,
    pub parallax_enabled: bool,
    pub max_words_per_chunk: usize,
    pub overlap_sentences: usize,
    pub words_per_minute: usize,

    /// Number of scenes in the plan
    pub num_scenes: usize,

    /// Total image prompts across all scenes
    pub total_shots: usize,

    /// Sum of per-scene narration estimates, rounded to one decimal
    pub estimated_duration_seconds: f64,
}

impl ConfigEcho {
    /// Build the echo from the config and plan totals.
    pub fn new(
        config: &Config,
        num_scenes: usize,
        total_shots: usize,
        estimated_duration_seconds: f64,
    ) -> Self {
        Self {
            max_scene_chars: config.max_scene_chars,
            broll_density: config.broll_density,
            image_engine: config.image_engine.to_string(),
            image_style: config.image_style.to_string(),
            character_profile: config.character_profile.clone(),
            voice_mode: config.voice_mode.to_string(),
            sfx_mode: config.sfx_mode.to_string(),
            parallax_enabled: config.parallax_enabled,
            max_words_per_chunk: config.max_words_per_chunk,
            overlap_sentences: config.overlap_sentences,
            words_per_minute: config.words_per_minute,
            num_scenes,
            total_shots,
            estimated_duration_seconds: (estimated_duration_seconds * 10.0).round() / 10.0,
        }
    }
}

/// The complete multi-track production plan for a novel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// Scenes in index order
    pub scenes: Vec<Scene>,

    /// Per-scene prompt lists, parallel to `scenes`
    pub image_prompts: Vec<Vec<ImagePrompt>>,

    /// Per-scene narration metadata, parallel to `scenes`
    pub narration: Vec<NarrationSegment>,

    /// Per-scene SFX cues, parallel to `scenes`
    pub sfx_cues: Vec<SceneSfx>,

    /// Characters sorted by mention count (descending), names ascending on ties
    pub characters: Vec<Character>,

    /// Echo of the configuration that produced this plan
    pub config: ConfigEcho,
}

impl ProductionPlan {
    /// Number of scenes in the plan.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Total image prompts across all scenes.
    pub fn total_shots(&self) -> usize {
        self.image_prompts.iter().map(|p| p.len()).sum()
    }

    /// Sum of per-scene narration duration estimates, in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.narration
            .iter()
            .map(|n| n.estimated_duration_seconds)
            .sum()
    }

    /// One-line human-readable summary of the plan.
    pub fn summary(&self) -> String {
        format!(
            "{} scenes | {} shots | {} characters | ~{:.1}s narration | {} / {}",
            self.scene_count(),
            self.total_shots(),
            self.characters.len(),
            self.total_duration_seconds(),
            self.config.image_engine,
            self.config.image_style,
        )
    }
}
