/*!
 * Chunked processing for novels too large to analyze in one pass.
 *
 * The splitter cuts the text into word-budgeted chunks aligned on scene
 * boundaries, the iterator walks them as a pure (chunks, cursor) function,
 * and the merger folds per-chunk pipeline outputs into one cumulative plan.
 * Merging the outputs of every chunk reproduces the single-pass plan exactly.
 */

pub use self::iterator::next_chunk;
pub use self::merger::{ChunkMerger, MergeState};
pub use self::splitter::{Chunk, ChunkSplitter};

pub mod iterator;
pub mod merger;
pub mod splitter;
