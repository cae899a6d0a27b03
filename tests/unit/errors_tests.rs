/*!
 * Tests for error types and conversions
 */

use std::io;
use std::path::PathBuf;
use cuemerge::errors::{AppError, FileError, SubtitleError};

#[test]
fn test_fileError_notFound_shouldDisplayPath() {
    let error = FileError::NotFound { path: PathBuf::from("captions.srt") };
    let display = format!("{}", error);
    assert!(display.contains("File not found"));
    assert!(display.contains("captions.srt"));
}

#[test]
fn test_fileError_writeFailure_shouldDisplayPathAndCause() {
    let error = FileError::WriteFailure {
        path: PathBuf::from("/readonly/out.srt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to write"));
    assert!(display.contains("/readonly/out.srt"));
    assert!(display.contains("permission denied"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_subtitleError_invalidTimecode_shouldDisplayInput() {
    let error = SubtitleError::InvalidTimecode("1:2:3".to_string());
    assert!(format!("{}", error).contains("1:2:3"));
}

#[test]
fn test_appError_fromFileError_shouldWrapCorrectly() {
    let app_error: AppError = FileError::NotFound { path: PathBuf::from("x.srt") }.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("x.srt"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref message) if message == "something odd"));
}
