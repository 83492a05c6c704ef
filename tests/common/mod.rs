/*!
 * Common test utilities for the cineplan test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds a synthetic novel of roughly `sections * words_per_section` words,
/// with hard scene breaks between sections
pub fn sample_novel(sections: usize, words_per_section: usize) -> String {
    (0..sections)
        .map(|i| {
            let sentence =
                format!("Elena studied corridor {i} of the old castle while the storm pressed against every door. ");
            sentence.repeat(words_per_section / 15).trim().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n\n\n")
}
