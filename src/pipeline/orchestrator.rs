/*!
 * Single-pass pipeline: normalize, segment, then derive every per-scene
 * output in index order.
 *
 * The run is a pure function of (text, configuration). Scenes are processed
 * strictly in index order so character counts accumulate the same way a
 * chunked run would replay them.
 */

use log::{debug, info};

use crate::analysis::{
    CharacterRegistry, NarrationAnalyzer, SceneSegmenter, SfxCueGenerator, SfxKeywordTable,
    ShotPlanner,
};
use crate::app_config::Config;
use crate::errors::{AppError, ValidationError};
use crate::plan::{ConfigEcho, ProductionPlan};
use crate::text::TextNormalizer;

/// Drives the full single-pass analysis of a novel text.
pub struct Orchestrator {
    config: Config,
    normalizer: TextNormalizer,
    segmenter: SceneSegmenter,
    shot_planner: ShotPlanner,
    narration_analyzer: NarrationAnalyzer,
    sfx_generator: SfxCueGenerator,
}

impl Orchestrator {
    /// Build an orchestrator from a validated configuration.
    pub fn new(config: Config) -> Result<Self, ValidationError> {
        config.validate()?;

        Ok(Self {
            normalizer: TextNormalizer::new(config.strip_chapter_headers),
            segmenter: SceneSegmenter::new(config.max_scene_chars),
            shot_planner: ShotPlanner::new(
                config.broll_density,
                config.image_engine,
                config.image_style,
            ),
            narration_analyzer: NarrationAnalyzer::new(config.words_per_minute),
            sfx_generator: SfxCueGenerator::new(SfxKeywordTable::default()),
            config,
        })
    }

    /// The configuration this orchestrator runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze a full text into a production plan.
    pub fn run(&self, text: &str) -> Result<ProductionPlan, AppError> {
        let normalized = self.normalizer.normalize(text)?;
        debug!(
            "Normalized input: {} words, {} chars",
            normalized.word_count, normalized.char_count
        );

        let scenes = self.segmenter.segment(&normalized.text);
        info!("Segmented into {} scenes", scenes.len());

        let mut registry = CharacterRegistry::with_profile(&self.config.character_profile);
        let mut image_prompts = Vec::with_capacity(scenes.len());
        let mut narration = Vec::with_capacity(scenes.len());
        let mut sfx_cues = Vec::with_capacity(scenes.len());

        for scene in &scenes {
            registry.observe(&scene.text);
            image_prompts.push(self.shot_planner.plan(scene.index, &scene.text));
            narration.push(self.narration_analyzer.analyze(scene.index, &scene.text));
            sfx_cues.push(self.sfx_generator.generate(scene.index, &scene.text));
        }

        let characters = registry.characters();
        let total_shots = image_prompts.iter().map(Vec::len).sum();
        let total_duration: f64 = narration
            .iter()
            .map(|n| n.estimated_duration_seconds)
            .sum();

        let config = ConfigEcho::new(&self.config, scenes.len(), total_shots, total_duration);

        Ok(ProductionPlan {
            scenes,
            image_prompts,
            narration,
            sfx_cues,
            characters,
            config,
        })
    }
}
