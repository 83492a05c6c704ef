/*!
 * Word-budgeted chunk splitting.
 *
 * The text is segmented into scenes first, then whole scenes are grouped
 * into ceil(total_words / max_words_per_chunk) balanced chunks. Each chunk
 * fills to the balanced per-chunk target, so a chunk can run past the target
 * by at most one scene but the chunk count never inflates. Scenes inside a
 * chunk are rejoined with hard scene breaks, so re-segmenting a chunk
 * reproduces exactly the scenes it was built from.
 *
 * Every chunk after the first carries the last `overlap_sentences` sentences
 * of the previous chunk's own scenes as a context prefix, joined to the body
 * with a hard break. The prefix is recorded on the chunk so the merger can
 * identify and drop the scenes it produces.
 */

use serde::{Deserialize, Serialize};

use crate::analysis::SceneSegmenter;
use crate::app_config::Config;
use crate::errors::ValidationError;
use crate::text::{TextNormalizer, split_sentences};

/// Separator that the segmenter always honors as a scene break.
const HARD_BREAK: &str = "\n\n\n";

/// One chunk of a large text, ready for an independent pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// 0-based position in the chunk sequence
    pub chunk_index: usize,

    /// Total chunks the text was split into
    pub total_chunks: usize,

    /// Text to analyze: overlap prefix (if any) plus this chunk's scenes
    pub text: String,

    /// Context carried from the previous chunk; empty on the first chunk
    pub overlap_prefix: String,

    /// Whitespace-delimited token count of `text`
    pub word_count: usize,

    /// Whether this is the first chunk
    pub is_first: bool,

    /// False only on the last chunk
    pub has_more: bool,
}

/// Scene-aligned splitter for large novels.
pub struct ChunkSplitter {
    normalizer: TextNormalizer,
    segmenter: SceneSegmenter,
    max_words_per_chunk: usize,
    overlap_sentences: usize,
}

impl ChunkSplitter {
    /// Build a splitter matching the pipeline's segmentation settings.
    pub fn new(config: &Config) -> Self {
        Self {
            normalizer: TextNormalizer::new(config.strip_chapter_headers),
            segmenter: SceneSegmenter::new(config.max_scene_chars),
            max_words_per_chunk: config.max_words_per_chunk,
            overlap_sentences: config.overlap_sentences,
        }
    }

    /// Split a raw text into chunks; rejects empty input.
    pub fn split(&self, text: &str) -> Result<Vec<Chunk>, ValidationError> {
        let normalized = self.normalizer.normalize(text)?;
        let scenes = self.segmenter.segment(&normalized.text);

        // Balance whole scenes across the minimum number of chunks
        let scene_words: Vec<usize> = scenes
            .iter()
            .map(|s| s.text.split_whitespace().count())
            .collect();
        let total_words: usize = scene_words.iter().sum();
        let num_chunks = total_words
            .div_ceil(self.max_words_per_chunk.max(1))
            .max(1);
        let target_words = total_words.div_ceil(num_chunks);

        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_words = 0usize;

        for (scene, words) in scenes.into_iter().zip(scene_words) {
            current.push(scene.text);
            current_words += words;
            if groups.len() + 1 < num_chunks && current_words >= target_words {
                groups.push(std::mem::take(&mut current));
                current_words = 0;
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }

        let total_chunks = groups.len();
        let mut chunks = Vec::with_capacity(total_chunks);
        let mut previous_body: Option<String> = None;

        for (chunk_index, group) in groups.into_iter().enumerate() {
            let body = group.join(HARD_BREAK);

            let overlap_prefix = match &previous_body {
                Some(prev) if self.overlap_sentences > 0 => trailing_sentences(prev, self.overlap_sentences),
                _ => String::new(),
            };

            let text = if overlap_prefix.is_empty() {
                body.clone()
            } else {
                format!("{overlap_prefix}{HARD_BREAK}{body}")
            };

            chunks.push(Chunk {
                chunk_index,
                total_chunks,
                word_count: text.split_whitespace().count(),
                overlap_prefix,
                is_first: chunk_index == 0,
                has_more: chunk_index + 1 < total_chunks,
                text,
            });

            previous_body = Some(body);
        }

        Ok(chunks)
    }
}

/// The last `count` sentences of a text, rejoined with single spaces.
fn trailing_sentences(text: &str, count: usize) -> String {
    let sentences = split_sentences(text);
    let start = sentences.len().saturating_sub(count);
    sentences[start..].join(" ")
}
