/*!
 * File and directory utilities.
 */

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::errors::SourceError;

/// Extensions accepted as plain-text novel input.
const TEXT_EXTENSIONS: [&str; 4] = ["txt", "md", "text", "markdown"];

/// File operations utility.
pub struct FileManager;

impl FileManager {
    /// Check file existence.
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Create a directory and its parents if needed.
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string.
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file, creating parent directories.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a novel text file, rejecting non-text extensions.
    pub fn load_novel_text<P: AsRef<Path>>(path: P) -> Result<String, SourceError> {
        let path = path.as_ref();

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(SourceError::UnsupportedFormat(extension));
        }

        fs::read_to_string(path).map_err(|e| SourceError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Write a value as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
        Self::write_to_file(path, &json)
    }
}
