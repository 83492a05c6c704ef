/*!
 * Scene segmentation for novel text.
 *
 * Scenes are built from paragraphs (blank-line separated blocks) accumulated
 * greedily up to a character limit. Runs of three or more newlines are hard
 * scene breaks: the current scene is always flushed there and no scene ever
 * spans one. A paragraph that alone exceeds the limit is force-split at the
 * nearest sentence end at or before the limit, falling back to the preceding
 * whitespace, and only then to the exact character limit.
 *
 * Segmentation is lossless up to whitespace: concatenating scene texts in
 * order and collapsing whitespace reproduces the normalized input.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::plan::Scene;

/// Hard scene breaks: three or more consecutive newlines.
static HARD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid hard-break regex"));

/// Paragraph separator within a hard-break section.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph regex"));

/// Greedy paragraph-based scene segmenter.
#[derive(Debug, Clone)]
pub struct SceneSegmenter {
    max_scene_chars: usize,
}

impl SceneSegmenter {
    /// Create a segmenter with the given scene length bound (in chars).
    pub fn new(max_scene_chars: usize) -> Self {
        Self { max_scene_chars }
    }

    /// Split normalized text into ordered, bounded, never-empty scenes.
    ///
    /// An input shorter than the limit yields exactly one scene.
    pub fn segment(&self, text: &str) -> Vec<Scene> {
        let mut texts: Vec<String> = Vec::new();

        for section in HARD_BREAK.split(text) {
            self.segment_section(section, &mut texts);
        }

        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Scene::new(index, text))
            .collect()
    }

    /// Accumulate one hard-break section; the current scene always flushes at
    /// the section end.
    fn segment_section(&self, section: &str, out: &mut Vec<String>) {
        let mut current = String::new();

        for paragraph in PARAGRAPH_BREAK.split(section) {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }

            if char_len(paragraph) > self.max_scene_chars {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                let mut pieces = self.force_split(paragraph);
                // The last piece stays open so following paragraphs can join it
                if let Some(last) = pieces.pop() {
                    out.append(&mut pieces);
                    current = last;
                }
                continue;
            }

            if current.is_empty() {
                current = paragraph.to_string();
            } else if char_len(&current) + 2 + char_len(paragraph) <= self.max_scene_chars {
                current.push_str("\n\n");
                current.push_str(paragraph);
            } else {
                out.push(std::mem::replace(&mut current, paragraph.to_string()));
            }
        }

        if !current.is_empty() {
            out.push(current);
        }
    }

    /// Split an oversized paragraph into pieces of at most `max_scene_chars`.
    ///
    /// Preferred split point is the last sentence-terminal punctuation at or
    /// before the limit, then the last whitespace, then the exact limit.
    fn force_split(&self, paragraph: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut chars: Vec<char> = paragraph.chars().collect();

        while chars.len() > self.max_scene_chars {
            let window = &chars[..self.max_scene_chars];

            let cut = window
                .iter()
                .rposition(|c| matches!(c, '.' | '!' | '?'))
                .map(|i| i + 1)
                .or_else(|| window.iter().rposition(|c| c.is_whitespace()))
                .unwrap_or(self.max_scene_chars);

            let piece: String = chars[..cut].iter().collect();
            let piece = piece.trim().to_string();
            if !piece.is_empty() {
                pieces.push(piece);
            }

            let rest: String = chars[cut..].iter().collect();
            chars = rest.trim_start().chars().collect();
        }

        if !chars.is_empty() {
            pieces.push(chars.into_iter().collect::<String>().trim().to_string());
        }

        pieces
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
