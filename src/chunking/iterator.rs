/*!
 * Pure cursor over a chunk sequence.
 *
 * State lives entirely in the caller's `(chunks, cursor)` pair. Calling
 * `next_chunk` twice with the same cursor returns the same chunk, so a caller
 * can safely retry a failed step before advancing.
 */

use super::splitter::Chunk;

/// Look up the chunk at `cursor` and the cursor for the one after it.
///
/// Returns `None` once the cursor is past the end.
pub fn next_chunk(chunks: &[Chunk], cursor: usize) -> Option<(&Chunk, usize)> {
    chunks.get(cursor).map(|chunk| (chunk, cursor + 1))
}
