/*!
 * Per-scene narration metadata.
 *
 * Duration is estimated from a configured words-per-minute reading speed.
 * Dialogue is tracked by toggling an inside-quote flag on each `"` character;
 * a word counts as dialogue when the flag is set at its first non-quote
 * character. An unterminated trailing quote extends to the scene's end, which
 * is deliberate policy rather than an error.
 */

use crate::plan::{NarrationSegment, narration_id};

/// Narration analyzer with a fixed reading speed.
#[derive(Debug, Clone)]
pub struct NarrationAnalyzer {
    words_per_minute: usize,
}

impl NarrationAnalyzer {
    /// Create an analyzer for the given words-per-minute speed.
    pub fn new(words_per_minute: usize) -> Self {
        Self { words_per_minute }
    }

    /// Derive narration metadata for one scene.
    pub fn analyze(&self, scene_idx: usize, scene_text: &str) -> NarrationSegment {
        let mut word_count = 0usize;
        let mut dialogue_words = 0usize;
        let mut in_quote = false;

        for word in scene_text.split_whitespace() {
            word_count += 1;
            let mut counted = false;
            for c in word.chars() {
                if c == '"' {
                    in_quote = !in_quote;
                } else if !counted {
                    if in_quote {
                        dialogue_words += 1;
                    }
                    counted = true;
                }
            }
        }

        let dialogue_ratio = if word_count == 0 {
            0.0
        } else {
            round_to(dialogue_words as f64 / word_count as f64, 2)
        };

        let minutes = word_count as f64 / self.words_per_minute.max(1) as f64;
        let estimated_duration_seconds = round_to(minutes * 60.0, 1);

        NarrationSegment {
            text: scene_text.to_string(),
            scene_idx,
            id: narration_id(scene_idx),
            word_count,
            estimated_duration_seconds,
            dialogue_ratio,
            // From the raw count: rounding the ratio to 0.00 must not hide dialogue
            has_dialogue: dialogue_words > 0,
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
