/*!
 * Folding per-chunk pipeline outputs into one cumulative plan.
 *
 * `MergeState` is a small serializable snapshot passed between merge calls;
 * abandoning a chunked run at any boundary leaves nothing to clean up. Each
 * merge drops the scenes produced by the chunk's overlap prefix, re-offsets
 * the retained scenes onto the global index sequence, and replays their texts
 * into the cumulative character registry so tiers always reflect global
 * counts.
 *
 * Folding every chunk of a text through `merge` yields a plan equal to
 * running the pipeline once over the whole text.
 */

use serde::{Deserialize, Serialize};

use crate::analysis::CharacterRegistry;
use crate::app_config::Config;
use crate::chunking::Chunk;
use crate::errors::ChunkError;
use crate::plan::{
    Character, ConfigEcho, ImagePrompt, NarrationSegment, ProductionPlan, Scene, SceneSfx,
};
use crate::text::collapse_whitespace;

/// Cumulative state carried between chunk merges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeState {
    /// Global index the next retained scene will receive
    pub next_scene_index: usize,

    /// Number of chunks folded in so far
    pub chunks_merged: usize,

    /// Total chunks recorded from the first merged chunk; 0 before that
    pub total_chunks: usize,

    registry: CharacterRegistry,
    scenes: Vec<Scene>,
    image_prompts: Vec<Vec<ImagePrompt>>,
    narration: Vec<NarrationSegment>,
    sfx_cues: Vec<SceneSfx>,
}

impl MergeState {
    /// Fresh state, optionally seeded with a custom character list.
    pub fn new(character_profile: &[String]) -> Self {
        Self {
            next_scene_index: 0,
            chunks_merged: 0,
            total_chunks: 0,
            registry: CharacterRegistry::with_profile(character_profile),
            scenes: Vec::new(),
            image_prompts: Vec::new(),
            narration: Vec::new(),
            sfx_cues: Vec::new(),
        }
    }

    /// Whether every chunk has been folded in.
    pub fn is_complete(&self) -> bool {
        self.total_chunks > 0 && self.chunks_merged == self.total_chunks
    }

    /// Characters tiered from the cumulative counts so far.
    pub fn characters(&self) -> Vec<Character> {
        self.registry.characters()
    }

    /// Materialize the cumulative plan.
    pub fn to_plan(&self, config: &Config) -> ProductionPlan {
        let total_shots = self.image_prompts.iter().map(Vec::len).sum();
        let total_duration: f64 = self
            .narration
            .iter()
            .map(|n| n.estimated_duration_seconds)
            .sum();

        ProductionPlan {
            scenes: self.scenes.clone(),
            image_prompts: self.image_prompts.clone(),
            narration: self.narration.clone(),
            sfx_cues: self.sfx_cues.clone(),
            characters: self.registry.characters(),
            config: ConfigEcho::new(config, self.scenes.len(), total_shots, total_duration),
        }
    }
}

/// Folds chunk outputs into a `MergeState`.
pub struct ChunkMerger;

impl ChunkMerger {
    /// Merge one chunk's pipeline output into the cumulative state.
    ///
    /// Consumes and returns the state; on error the chunked run is over and
    /// no partial plan is produced.
    pub fn merge(
        mut state: MergeState,
        chunk: &Chunk,
        output: &ProductionPlan,
    ) -> Result<MergeState, ChunkError> {
        Self::check_sequence(&state, chunk)?;
        Self::check_shape(chunk, output)?;

        let skip = Self::overlap_scene_count(chunk, output)?;

        for (local_idx, scene) in output.scenes.iter().enumerate().skip(skip) {
            let global_idx = state.next_scene_index;

            state.registry.observe(&scene.text);
            state.scenes.push(scene.reindexed(global_idx));
            state.image_prompts.push(
                output.image_prompts[local_idx]
                    .iter()
                    .map(|p| p.with_scene_idx(global_idx))
                    .collect(),
            );
            state
                .narration
                .push(output.narration[local_idx].with_scene_idx(global_idx));
            state
                .sfx_cues
                .push(output.sfx_cues[local_idx].with_scene_idx(global_idx));

            state.next_scene_index += 1;
        }

        if state.chunks_merged == 0 {
            state.total_chunks = chunk.total_chunks;
        }
        state.chunks_merged += 1;

        Ok(state)
    }

    fn check_sequence(state: &MergeState, chunk: &Chunk) -> Result<(), ChunkError> {
        if chunk.chunk_index != state.chunks_merged {
            return Err(ChunkError::OutOfOrder {
                expected: state.chunks_merged,
                actual: chunk.chunk_index,
            });
        }
        if chunk.is_first != (chunk.chunk_index == 0) {
            return Err(ChunkError::FirstChunkConflict {
                chunk_index: chunk.chunk_index,
                is_first: chunk.is_first,
            });
        }
        if state.chunks_merged > 0 && chunk.total_chunks != state.total_chunks {
            return Err(ChunkError::TotalChunksMismatch {
                expected: state.total_chunks,
                actual: chunk.total_chunks,
            });
        }
        Ok(())
    }

    fn check_shape(chunk: &Chunk, output: &ProductionPlan) -> Result<(), ChunkError> {
        let scenes = output.scenes.len();
        if output.image_prompts.len() != scenes
            || output.narration.len() != scenes
            || output.sfx_cues.len() != scenes
        {
            return Err(ChunkError::MalformedOutput {
                chunk_index: chunk.chunk_index,
                message: format!(
                    "{} scenes but {} prompt lists, {} narration segments, {} sfx records",
                    scenes,
                    output.image_prompts.len(),
                    output.narration.len(),
                    output.sfx_cues.len()
                ),
            });
        }
        Ok(())
    }

    /// How many leading scenes of the output reproduce the overlap prefix.
    ///
    /// The prefix joins the chunk body across a hard scene break, so its
    /// scenes never blend into body scenes; matching is done on
    /// whitespace-collapsed text.
    fn overlap_scene_count(chunk: &Chunk, output: &ProductionPlan) -> Result<usize, ChunkError> {
        let target = collapse_whitespace(&chunk.overlap_prefix);
        if target.is_empty() {
            return Ok(0);
        }

        let mut accumulated = String::new();
        for (count, scene) in output.scenes.iter().enumerate() {
            if !accumulated.is_empty() {
                accumulated.push(' ');
            }
            accumulated.push_str(&collapse_whitespace(&scene.text));

            if accumulated == target {
                return Ok(count + 1);
            }
            if accumulated.len() >= target.len() {
                break;
            }
        }

        Err(ChunkError::OverlapMismatch {
            chunk_index: chunk.chunk_index,
        })
    }
}
