/*!
 * Text preparation utilities.
 *
 * - `normalizer`: whitespace cleanup and optional chapter-header stripping
 */

pub use self::normalizer::{NormalizedText, TextNormalizer, collapse_whitespace, split_sentences};

pub mod normalizer;
