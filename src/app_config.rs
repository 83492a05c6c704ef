/*!
 * Application configuration module.
 *
 * This module handles the application configuration including loading,
 * validating and saving configuration settings. Every recognized option is an
 * explicit field with a bounded or enumerated domain, validated once at entry.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Bounds for `max_scene_chars`.
pub const MAX_SCENE_CHARS_RANGE: (usize, usize) = (500, 10_000);
/// Bounds for `broll_density`.
pub const BROLL_DENSITY_RANGE: (usize, usize) = (1, 16);
/// Bounds for `max_words_per_chunk`.
pub const MAX_WORDS_PER_CHUNK_RANGE: (usize, usize) = (5_000, 50_000);
/// Bounds for `overlap_sentences`.
pub const OVERLAP_SENTENCES_RANGE: (usize, usize) = (0, 10);
/// Bounds for `words_per_minute`.
pub const WORDS_PER_MINUTE_RANGE: (usize, usize) = (50, 400);

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Maximum characters per scene; smaller values produce more scenes
    #[serde(default = "default_max_scene_chars")]
    pub max_scene_chars: usize,

    /// Number of image prompts generated per scene
    #[serde(default = "default_broll_density")]
    pub broll_density: usize,

    /// Target image generation engine
    #[serde(default)]
    pub image_engine: ImageEngine,

    /// Visual style applied to every image prompt
    #[serde(default)]
    pub image_style: ImageStyle,

    /// External character reference names, passed through to downstream nodes
    #[serde(default)]
    pub character_profile: Vec<String>,

    /// Voice pipeline hint, passed through and not consumed by the core
    #[serde(default)]
    pub voice_mode: VoiceMode,

    /// SFX pipeline hint, passed through and not consumed by the core
    #[serde(default)]
    pub sfx_mode: SfxMode,

    /// Parallax pipeline hint, passed through and not consumed by the core
    #[serde(default = "default_parallax_enabled")]
    pub parallax_enabled: bool,

    /// Maximum words per chunk when splitting large novels
    #[serde(default = "default_max_words_per_chunk")]
    pub max_words_per_chunk: usize,

    /// Trailing sentences of each chunk re-prefixed onto the next for context
    #[serde(default = "default_overlap_sentences")]
    pub overlap_sentences: usize,

    /// Reading speed used to estimate narration duration.
    /// The default of 150 words per minute matches average narration pace.
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: usize,

    /// Whether the normalizer strips chapter-heading lines
    #[serde(default)]
    pub strip_chapter_headers: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_max_scene_chars() -> usize {
    2000
}

fn default_broll_density() -> usize {
    4
}

fn default_parallax_enabled() -> bool {
    true
}

fn default_max_words_per_chunk() -> usize {
    15_000
}

fn default_overlap_sentences() -> usize {
    3
}

fn default_words_per_minute() -> usize {
    150
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_scene_chars: default_max_scene_chars(),
            broll_density: default_broll_density(),
            image_engine: ImageEngine::default(),
            image_style: ImageStyle::default(),
            character_profile: Vec::new(),
            voice_mode: VoiceMode::default(),
            sfx_mode: SfxMode::default(),
            parallax_enabled: default_parallax_enabled(),
            max_words_per_chunk: default_max_words_per_chunk(),
            overlap_sentences: default_overlap_sentences(),
            words_per_minute: default_words_per_minute(),
            strip_chapter_headers: false,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate every bounded field against its domain.
    ///
    /// Returns the first violation found; a config that passes here is
    /// accepted by every component without further checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range(
            "max_scene_chars",
            self.max_scene_chars,
            MAX_SCENE_CHARS_RANGE,
        )?;
        check_range("broll_density", self.broll_density, BROLL_DENSITY_RANGE)?;
        check_range(
            "max_words_per_chunk",
            self.max_words_per_chunk,
            MAX_WORDS_PER_CHUNK_RANGE,
        )?;
        check_range(
            "overlap_sentences",
            self.overlap_sentences,
            OVERLAP_SENTENCES_RANGE,
        )?;
        check_range(
            "words_per_minute",
            self.words_per_minute,
            WORDS_PER_MINUTE_RANGE,
        )?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: usize,
    (min, max): (usize, usize),
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Image generation engine type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageEngine {
    #[default]
    Flux,
    Sdxl,
    Sd15,
    Cascade,
    Pixart,
}

impl ImageEngine {
    /// Quality tail appended to every prompt, tuned per engine.
    pub fn quality_suffix(&self) -> &'static str {
        match self {
            Self::Flux => "masterpiece, best quality, highly detailed, sharp focus",
            Self::Sdxl => "masterpiece, best quality, ultra detailed, 8k uhd",
            Self::Sd15 => "best quality, highly detailed, sharp focus, intricate details",
            Self::Cascade => "high quality, detailed, professional, sharp",
            Self::Pixart => "high quality artwork, detailed, aesthetic, professional",
        }
    }

    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Flux => "flux".to_string(),
            Self::Sdxl => "sdxl".to_string(),
            Self::Sd15 => "sd15".to_string(),
            Self::Cascade => "cascade".to_string(),
            Self::Pixart => "pixart".to_string(),
        }
    }
}

impl std::fmt::Display for ImageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for ImageEngine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "flux" => Ok(Self::Flux),
            "sdxl" => Ok(Self::Sdxl),
            "sd15" => Ok(Self::Sd15),
            "cascade" => Ok(Self::Cascade),
            "pixart" => Ok(Self::Pixart),
            _ => Err(anyhow!("Invalid image engine: {}", s)),
        }
    }
}

/// Visual style applied to image prompts
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Cinematic,
    Anime,
    Realistic,
    Painterly,
    Comic,
    Storyboard,
}

impl ImageStyle {
    /// Style modifier appended to every prompt.
    pub fn style_template(&self) -> &'static str {
        match self {
            Self::Cinematic => {
                "cinematic film still, dramatic lighting, shallow depth of field, \
                 professional cinematography, 4K, HDR"
            }
            Self::Anime => {
                "anime art style, vibrant colors, detailed linework, \
                 studio quality animation, expressive characters"
            }
            Self::Realistic => {
                "photorealistic, hyperdetailed, natural lighting, 8K resolution, \
                 professional photography"
            }
            Self::Painterly => {
                "oil painting style, rich textures, artistic brushstrokes, \
                 masterful composition, gallery quality"
            }
            Self::Comic => {
                "comic book art, bold lines, dynamic composition, vibrant panel art, \
                 graphic novel style"
            }
            Self::Storyboard => {
                "storyboard frame, concept art, key frame, professional pre-visualization"
            }
        }
    }

    /// Fixed negative prompt for the style.
    pub fn negative_prompt(&self) -> String {
        const BASE: &str = "blurry, low quality, distorted, deformed, ugly, bad anatomy, \
                            watermark, text, signature";
        let suffix = match self {
            Self::Cinematic | Self::Storyboard => "",
            Self::Anime => ", photorealistic, 3d render",
            Self::Realistic => ", cartoon, anime, painting",
            Self::Painterly => ", photograph, flat colors",
            Self::Comic => ", photorealistic",
        };
        format!("{}{}", BASE, suffix)
    }

    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Cinematic => "cinematic".to_string(),
            Self::Anime => "anime".to_string(),
            Self::Realistic => "realistic".to_string(),
            Self::Painterly => "painterly".to_string(),
            Self::Comic => "comic".to_string(),
            Self::Storyboard => "storyboard".to_string(),
        }
    }
}

impl std::fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for ImageStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cinematic" => Ok(Self::Cinematic),
            "anime" => Ok(Self::Anime),
            "realistic" => Ok(Self::Realistic),
            "painterly" => Ok(Self::Painterly),
            "comic" => Ok(Self::Comic),
            "storyboard" => Ok(Self::Storyboard),
            _ => Err(anyhow!("Invalid image style: {}", s)),
        }
    }
}

/// Voice pipeline hint, echoed into the config output.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoiceMode {
    #[default]
    IndexTts,
    IndexClone,
    Xtts,
    Voxcpm,
    Chatterbox,
}

impl std::fmt::Display for VoiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::IndexTts => "index_tts",
            Self::IndexClone => "index_clone",
            Self::Xtts => "xtts",
            Self::Voxcpm => "voxcpm",
            Self::Chatterbox => "chatterbox",
        };
        write!(f, "{}", s)
    }
}

/// SFX pipeline hint, echoed into the config output.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SfxMode {
    #[default]
    MmaudioAuto,
    MmaudioPrompted,
    StableAudio,
    None,
}

impl std::fmt::Display for SfxMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MmaudioAuto => "mmaudio_auto",
            Self::MmaudioPrompted => "mmaudio_prompted",
            Self::StableAudio => "stable_audio",
            Self::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}
