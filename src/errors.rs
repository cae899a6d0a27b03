/*!
 * Error types for the cuemerge application.
 *
 * The subtitle parser itself never fails; errors only surface at the I/O
 * boundary and when a timecode is built from arbitrary text.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing files
#[derive(Error, Debug)]
pub enum FileError {
    /// The input path does not exist
    #[error("File not found: {}", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The input exists but could not be read
    #[error("Failed to read file {}: {source}", path.display())]
    ReadFailure {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output could not be written
    #[error("Failed to write to {}: {source}", path.display())]
    WriteFailure {
        /// Destination path (`-` for standard output)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when building subtitle values
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubtitleError {
    /// Text does not follow the `HH:MM:SS,mmm` pattern
    #[error("Invalid timecode: '{0}' (expected HH:MM:SS,mmm)")]
    InvalidTimecode(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
