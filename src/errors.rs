/*!
 * Error types for the cineplan application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised when input text or configuration fails validation.
///
/// These are surfaced immediately and never retried.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Input text was empty or whitespace-only
    #[error("Input text is empty")]
    EmptyInput,

    /// A numeric configuration value fell outside its bounded domain
    #[error("Invalid value for {field}: {value} (allowed range {min}..={max})")]
    OutOfRange {
        /// Name of the offending configuration field
        field: &'static str,
        /// The rejected value
        value: usize,
        /// Lower bound (inclusive)
        min: usize,
        /// Upper bound (inclusive)
        max: usize,
    },

    /// An enumerated configuration value was not recognized
    #[error("Invalid value for {field}: {value}")]
    InvalidOption {
        /// Name of the offending configuration field
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Errors raised by the text-source layer, not by the analysis core.
///
/// The core only ever receives already-decoded plain text.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The input file extension is not a supported plain-text format
    #[error("Unsupported input format: {0} (expected .txt, .md, .text or .markdown)")]
    UnsupportedFormat(String),

    /// The input file could not be read
    #[error("Failed to read {path}: {message}")]
    ReadFailed {
        /// Path that failed to load
        path: String,
        /// Underlying I/O error text
        message: String,
    },
}

/// Errors raised when the chunk merger receives an inconsistent state/chunk pair.
///
/// These are fatal and are never silently corrected; no partial plan is
/// returned once one occurs.
#[derive(Error, Debug)]
pub enum ChunkError {
    /// A chunk arrived out of sequence
    #[error("Chunk arrived out of order: expected index {expected}, got {actual}")]
    OutOfOrder {
        /// Index the merge state expected next
        expected: usize,
        /// Index carried by the chunk
        actual: usize,
    },

    /// The chunk reports a different total than previously merged chunks
    #[error("Inconsistent chunk count: state recorded {expected} total chunks, chunk says {actual}")]
    TotalChunksMismatch {
        /// Total recorded by the merge state
        expected: usize,
        /// Total carried by the chunk
        actual: usize,
    },

    /// The first-chunk flag disagrees with the chunk index
    #[error("Chunk {chunk_index} has is_first={is_first}, which contradicts its index")]
    FirstChunkConflict {
        /// Index carried by the chunk
        chunk_index: usize,
        /// The contradictory flag value
        is_first: bool,
    },

    /// The leading scenes of a chunk did not match its recorded overlap prefix
    #[error("Overlap prefix of chunk {chunk_index} does not match its leading scenes")]
    OverlapMismatch {
        /// Index of the offending chunk
        chunk_index: usize,
    },

    /// The chunk output disagrees in shape with its scene list
    #[error("Chunk {chunk_index} output is malformed: {message}")]
    MalformedOutput {
        /// Index of the offending chunk
        chunk_index: usize,
        /// Description of the shape violation
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from input or configuration validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from the text-source layer
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Error from chunk merging
    #[error("Chunk error: {0}")]
    Chunk(#[from] ChunkError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
