/*!
 * Tests for chunked processing of large novels
 */

use cineplan::app_config::Config;
use cineplan::chunking::{ChunkMerger, ChunkSplitter, MergeState, next_chunk};
use cineplan::pipeline::Orchestrator;

use crate::common;

fn chunked_config() -> Config {
    Config {
        max_words_per_chunk: 15_000,
        overlap_sentences: 3,
        ..Config::default()
    }
}

/// A ~30000-word novel splits into two chunks with an overlap prefix
#[test]
fn test_chunkedRun_withThirtyThousandWords_shouldSplitIntoTwoOverlappingChunks() {
    let text = common::sample_novel(30, 1_000);
    let config = chunked_config();

    let chunks = ChunkSplitter::new(&config).split(&text).unwrap();

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].is_first);
    assert!(chunks[0].has_more);
    assert!(chunks[0].overlap_prefix.is_empty());
    assert!(!chunks[1].is_first);
    assert!(!chunks[1].has_more);
    assert!(!chunks[1].overlap_prefix.is_empty());
    assert!(chunks[1].text.starts_with(&chunks[1].overlap_prefix));
}

/// Walking the chunks with the pure iterator covers each exactly once
#[test]
fn test_chunkedRun_iterator_shouldVisitEveryChunkOnce() {
    let text = common::sample_novel(30, 1_000);
    let chunks = ChunkSplitter::new(&chunked_config()).split(&text).unwrap();

    let mut cursor = 0;
    let mut visited = Vec::new();
    while let Some((chunk, next_cursor)) = next_chunk(&chunks, cursor) {
        visited.push(chunk.chunk_index);
        cursor = next_cursor;
    }

    assert_eq!(visited, (0..chunks.len()).collect::<Vec<_>>());
}

/// Merging every chunk reproduces the single-pass plan exactly
#[test]
fn test_chunkedRun_merge_shouldEqualSinglePassPlan() {
    let text = common::sample_novel(30, 1_000);
    let config = chunked_config();

    let orchestrator = Orchestrator::new(config.clone()).unwrap();
    let single_pass = orchestrator.run(&text).unwrap();

    let chunks = ChunkSplitter::new(&config).split(&text).unwrap();
    let mut state = MergeState::new(&config.character_profile);
    let mut cursor = 0;
    while let Some((chunk, next_cursor)) = next_chunk(&chunks, cursor) {
        let output = orchestrator.run(&chunk.text).unwrap();
        state = ChunkMerger::merge(state, chunk, &output).unwrap();
        cursor = next_cursor;
    }

    assert!(state.is_complete());
    let merged = state.to_plan(&config);

    assert_eq!(merged.scenes, single_pass.scenes);
    assert_eq!(merged.image_prompts, single_pass.image_prompts);
    assert_eq!(merged.narration, single_pass.narration);
    assert_eq!(merged.sfx_cues, single_pass.sfx_cues);
    assert_eq!(merged.characters, single_pass.characters);
    assert_eq!(merged, single_pass);
}

/// Merged scene ids stay globally contiguous across chunk boundaries
#[test]
fn test_chunkedRun_merge_shouldKeepIdsContiguous() {
    let text = common::sample_novel(30, 1_000);
    let config = chunked_config();

    let orchestrator = Orchestrator::new(config.clone()).unwrap();
    let chunks = ChunkSplitter::new(&config).split(&text).unwrap();

    let mut state = MergeState::new(&config.character_profile);
    for chunk in &chunks {
        let output = orchestrator.run(&chunk.text).unwrap();
        state = ChunkMerger::merge(state, chunk, &output).unwrap();
    }
    let plan = state.to_plan(&config);

    for (i, scene) in plan.scenes.iter().enumerate() {
        assert_eq!(scene.index, i);
        assert_eq!(scene.id, format!("scene_{:03}", i + 1));
        assert_eq!(plan.narration[i].id, format!("narration_scene_{:03}", i + 1));
        assert_eq!(plan.sfx_cues[i].id, format!("sfx_scene_{:03}", i + 1));
        for (j, prompt) in plan.image_prompts[i].iter().enumerate() {
            assert_eq!(prompt.scene_idx, i);
            assert_eq!(prompt.shot_idx, j);
            assert_eq!(prompt.id, format!("scene_{:03}_shot_{:02}", i + 1, j + 1));
        }
    }
}

/// Resuming from a serialized MergeState mid-run changes nothing
#[test]
fn test_chunkedRun_merge_withSerializedStateHandoff_shouldStillMatchSinglePass() {
    let text = common::sample_novel(30, 1_000);
    let config = chunked_config();

    let orchestrator = Orchestrator::new(config.clone()).unwrap();
    let single_pass = orchestrator.run(&text).unwrap();
    let chunks = ChunkSplitter::new(&config).split(&text).unwrap();

    let mut state = MergeState::new(&config.character_profile);
    for chunk in &chunks {
        // Simulate an external caller persisting state between steps
        let json = serde_json::to_string(&state).unwrap();
        state = serde_json::from_str(&json).unwrap();

        let output = orchestrator.run(&chunk.text).unwrap();
        state = ChunkMerger::merge(state, chunk, &output).unwrap();
    }

    assert_eq!(state.to_plan(&config), single_pass);
}
