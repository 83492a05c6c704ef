/*!
 * Tests for application configuration functionality
 */

use cineplan::app_config::{Config, ImageEngine, ImageStyle, LogLevel, SfxMode, VoiceMode};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.max_scene_chars, 2000);
    assert_eq!(config.broll_density, 4);
    assert_eq!(config.image_engine, ImageEngine::Flux);
    assert_eq!(config.image_style, ImageStyle::Cinematic);
    assert_eq!(config.voice_mode, VoiceMode::IndexTts);
    assert_eq!(config.sfx_mode, SfxMode::MmaudioAuto);
    assert!(config.parallax_enabled);
    assert_eq!(config.max_words_per_chunk, 15_000);
    assert_eq!(config.overlap_sentences, 3);
    assert_eq!(config.words_per_minute, 150);
    assert!(!config.strip_chapter_headers);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation bounds
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.max_scene_chars = 100;
    assert!(config.validate().is_err());
    config.max_scene_chars = 500;
    assert!(config.validate().is_ok());
    config.max_scene_chars = 10_000;
    assert!(config.validate().is_ok());
    config.max_scene_chars = 10_001;
    assert!(config.validate().is_err());
    config.max_scene_chars = 2000;

    config.broll_density = 0;
    assert!(config.validate().is_err());
    config.broll_density = 17;
    assert!(config.validate().is_err());
    config.broll_density = 16;
    assert!(config.validate().is_ok());
    config.broll_density = 4;

    config.overlap_sentences = 11;
    assert!(config.validate().is_err());
    config.overlap_sentences = 0;
    assert!(config.validate().is_ok());

    config.words_per_minute = 49;
    assert!(config.validate().is_err());
    config.words_per_minute = 401;
    assert!(config.validate().is_err());
}

/// Test partial JSON configs fall back to field defaults
#[test]
fn test_config_deserialization_withPartialJson_shouldFillDefaults() {
    let config: Config =
        serde_json::from_str(r#"{"broll_density": 8, "image_style": "anime"}"#).unwrap();

    assert_eq!(config.broll_density, 8);
    assert_eq!(config.image_style, ImageStyle::Anime);
    assert_eq!(config.max_scene_chars, 2000);
    assert_eq!(config.image_engine, ImageEngine::Flux);
}

/// Test enum string round-trips used by CLI and config files
#[test]
fn test_enum_parsing_withValidStrings_shouldRoundTrip() {
    assert_eq!("sdxl".parse::<ImageEngine>().unwrap(), ImageEngine::Sdxl);
    assert_eq!(ImageEngine::Sd15.to_string(), "sd15");
    assert_eq!(
        "painterly".parse::<ImageStyle>().unwrap(),
        ImageStyle::Painterly
    );
    assert_eq!(ImageStyle::Storyboard.to_string(), "storyboard");

    assert!("dalle".parse::<ImageEngine>().is_err());
    assert!("sketch".parse::<ImageStyle>().is_err());
}

/// Test style templates feed distinct prompt modifiers
#[test]
fn test_imageStyle_templates_shouldDifferPerStyle() {
    assert_ne!(
        ImageStyle::Cinematic.style_template(),
        ImageStyle::Anime.style_template()
    );
    assert_ne!(
        ImageStyle::Comic.negative_prompt(),
        ImageStyle::Realistic.negative_prompt()
    );
    assert_ne!(
        ImageEngine::Flux.quality_suffix(),
        ImageEngine::Cascade.quality_suffix()
    );
}
