/*!
 * Text normalization for novel input.
 *
 * Cleans up the usual artifacts of pasted or exported novel text: stray BOMs,
 * mixed line endings, trailing whitespace and runaway blank lines. Runs of
 * three or more newlines are treated as deliberate scene dividers and are
 * preserved as exactly three, so the segmenter can honor them later.
 *
 * Normalization is idempotent: chunk texts assembled from already-normalized
 * scenes pass through unchanged.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;

/// Pattern for chapter-heading lines ("Chapter 12", "PART 3", markdown headers).
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:chapter\s+\d+.*|part\s+\d+.*|\d+\.\s*|#{1,6}\s+.*)$")
        .expect("Invalid header regex")
});

/// Runs of 4+ newlines collapse to a single hard break of 3.
static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{4,}").expect("Invalid blank-line regex"));

/// Runs of spaces/tabs collapse to one space.
static EXCESS_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("Invalid spaces regex"));

/// Normalized text together with its basic counts.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    /// The cleaned text
    pub text: String,

    /// Whitespace-delimited token count
    pub word_count: usize,

    /// Character count of the cleaned text
    pub char_count: usize,
}

/// Whitespace normalizer for raw novel text.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    strip_chapter_headers: bool,
}

impl TextNormalizer {
    /// Create a normalizer.
    pub fn new(strip_chapter_headers: bool) -> Self {
        Self {
            strip_chapter_headers,
        }
    }

    /// Normalize raw text, rejecting empty input.
    pub fn normalize(&self, text: &str) -> Result<NormalizedText, ValidationError> {
        let mut cleaned = text.trim_start_matches('\u{feff}').replace("\r\n", "\n");
        cleaned = cleaned.replace('\r', "\n");

        let mut lines: Vec<&str> = cleaned.lines().map(|line| line.trim_end()).collect();
        if self.strip_chapter_headers {
            lines.retain(|line| !HEADER_PATTERN.is_match(line));
        }
        let joined = lines.join("\n");

        let collapsed = EXCESS_BLANK_LINES.replace_all(&joined, "\n\n\n");
        let collapsed = EXCESS_SPACES.replace_all(&collapsed, " ");
        let final_text = collapsed.trim().to_string();

        if final_text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let word_count = final_text.split_whitespace().count();
        let char_count = final_text.chars().count();

        Ok(NormalizedText {
            text: final_text,
            word_count,
            char_count,
        })
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
///
/// This is the comparison form used to check that segmentation is lossless
/// and that a chunk's leading scenes match its overlap prefix.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentences at terminal punctuation followed by whitespace.
///
/// The final fragment is kept even without terminal punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            let mut end = i + 1;
            // Consume closing quotes attached to the sentence
            while end < bytes.len() && (bytes[end] == b'"' || bytes[end] == b'\'') {
                end += 1;
            }
            if end >= bytes.len() || bytes[end].is_ascii_whitespace() {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textNormalizer_normalize_shouldCollapseWhitespace() {
        let normalizer = TextNormalizer::default();
        let result = normalizer
            .normalize("Hello   world.  \r\nSecond    line.\r\n")
            .unwrap();

        assert_eq!(result.text, "Hello world.\nSecond line.");
        assert_eq!(result.word_count, 4);
    }

    #[test]
    fn test_textNormalizer_normalize_shouldPreserveHardBreaks() {
        let normalizer = TextNormalizer::default();
        let result = normalizer.normalize("One.\n\n\n\n\n\nTwo.").unwrap();

        assert_eq!(result.text, "One.\n\n\nTwo.");
    }

    #[test]
    fn test_textNormalizer_normalize_shouldRejectEmptyInput() {
        let normalizer = TextNormalizer::default();

        assert!(matches!(
            normalizer.normalize("   \n\n  "),
            Err(ValidationError::EmptyInput)
        ));
    }

    #[test]
    fn test_textNormalizer_normalize_shouldStripBom() {
        let normalizer = TextNormalizer::default();
        let result = normalizer.normalize("\u{feff}Hello there.").unwrap();

        assert_eq!(result.text, "Hello there.");
    }

    #[test]
    fn test_textNormalizer_normalize_shouldBeIdempotent() {
        let normalizer = TextNormalizer::default();
        let once = normalizer
            .normalize("Para one.\n\n\n\nPara   two.\n\nPara three.")
            .unwrap();
        let twice = normalizer.normalize(&once.text).unwrap();

        assert_eq!(once.text, twice.text);
    }

    #[test]
    fn test_textNormalizer_normalize_withHeaderStripping_shouldDropChapterLines() {
        let normalizer = TextNormalizer::new(true);
        let result = normalizer
            .normalize("Chapter 1\n\nThe story begins here.\n\n## Interlude\n\nMore text.")
            .unwrap();

        assert!(!result.text.contains("Chapter 1"));
        assert!(!result.text.contains("Interlude"));
        assert!(result.text.contains("The story begins here."));
    }

    #[test]
    fn test_textNormalizer_normalize_withoutHeaderStripping_shouldKeepChapterLines() {
        let normalizer = TextNormalizer::new(false);
        let result = normalizer
            .normalize("Chapter 1\n\nThe story begins here.")
            .unwrap();

        assert!(result.text.contains("Chapter 1"));
    }

    #[test]
    fn test_collapseWhitespace_shouldFlattenAllRuns() {
        assert_eq!(
            collapse_whitespace("  a\n\nb\tc   d\n"),
            "a b c d".to_string()
        );
    }

    #[test]
    fn test_splitSentences_shouldSplitOnTerminals() {
        let sentences = split_sentences("First one. Second one! Third one? Trailing bit");

        assert_eq!(
            sentences,
            vec!["First one.", "Second one!", "Third one?", "Trailing bit"]
        );
    }

    #[test]
    fn test_splitSentences_shouldNotSplitInsideNumbers() {
        let sentences = split_sentences("Version 1.5 shipped. It worked.");

        assert_eq!(sentences, vec!["Version 1.5 shipped.", "It worked."]);
    }

    #[test]
    fn test_splitSentences_shouldKeepClosingQuotes() {
        let sentences = split_sentences("\"Run!\" she cried. He ran.");

        assert_eq!(sentences, vec!["\"Run!\"", "she cried.", "He ran."]);
    }
}
