/*!
 * Application controller for novel analysis.
 *
 * Decides between a single-pass run and a chunked run based on the input's
 * word count, drives the pipeline, and writes the six plan outputs as JSON
 * files into the output directory.
 */

use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::app_config::Config;
use crate::chunking::{ChunkMerger, ChunkSplitter, MergeState, next_chunk};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::pipeline::Orchestrator;
use crate::plan::ProductionPlan;

/// Output file names, one per plan track.
const OUTPUT_FILES: [&str; 6] = [
    "scenes.json",
    "image_prompts.json",
    "narration.json",
    "sfx_cues.json",
    "characters.json",
    "config.json",
];

/// Main application controller.
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller with the given configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the full workflow: load, analyze, write outputs.
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !force_overwrite {
            if let Some(existing) = OUTPUT_FILES
                .iter()
                .find(|name| output_dir.join(name).exists())
            {
                warn!(
                    "Skipping run, {} already exists in {:?} (use -f to force overwrite)",
                    existing, output_dir
                );
                return Ok(());
            }
        }

        let text = FileManager::load_novel_text(&input_file)?;
        info!(
            "Loaded {:?}: {} words",
            input_file,
            text.split_whitespace().count()
        );

        let plan = self.build_plan(&text)?;
        info!("{}", plan.summary());

        self.write_outputs(&plan, &output_dir)?;

        info!(
            "Plan written to {:?} in {:.1}s",
            output_dir,
            start_time.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Analyze a text, chunking it when it exceeds the per-chunk word budget.
    pub fn build_plan(&self, text: &str) -> Result<ProductionPlan, AppError> {
        let word_count = text.split_whitespace().count();

        if word_count <= self.config.max_words_per_chunk {
            info!("Processing in a single pass ({} words)", word_count);
            let orchestrator = Orchestrator::new(self.config.clone())?;
            return orchestrator.run(text);
        }

        info!(
            "Input exceeds {} words, processing in chunks",
            self.config.max_words_per_chunk
        );
        self.build_plan_chunked(text)
    }

    fn build_plan_chunked(&self, text: &str) -> Result<ProductionPlan, AppError> {
        let splitter = ChunkSplitter::new(&self.config);
        let orchestrator = Orchestrator::new(self.config.clone())?;

        let chunks = splitter.split(text)?;
        let progress = chunk_progress_bar(chunks.len());

        let mut state = MergeState::new(&self.config.character_profile);
        let mut cursor = 0;

        while let Some((chunk, next_cursor)) = next_chunk(&chunks, cursor) {
            let output = orchestrator.run(&chunk.text)?;
            state = ChunkMerger::merge(state, chunk, &output)?;
            cursor = next_cursor;
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "Merged {} chunks into {} scenes",
            state.chunks_merged, state.next_scene_index
        );
        Ok(state.to_plan(&self.config))
    }

    /// Write the six plan tracks as JSON files.
    pub fn write_outputs(&self, plan: &ProductionPlan, output_dir: &Path) -> Result<()> {
        FileManager::ensure_dir(output_dir)?;

        FileManager::write_json(output_dir.join("scenes.json"), &plan.scenes)?;
        FileManager::write_json(output_dir.join("image_prompts.json"), &plan.image_prompts)?;
        FileManager::write_json(output_dir.join("narration.json"), &plan.narration)?;
        FileManager::write_json(output_dir.join("sfx_cues.json"), &plan.sfx_cues)?;
        FileManager::write_json(output_dir.join("characters.json"), &plan.characters)?;
        FileManager::write_json(output_dir.join("config.json"), &plan.config)?;

        Ok(())
    }
}

fn chunk_progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style.progress_chars("#>-"));
    bar
}
