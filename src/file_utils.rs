use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::debug;
use crate::errors::FileError;

// @module: File utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Insert `.suffix` before the extension of `input`, keeping its directory.
    ///
    /// `captions.srt` becomes `captions.merged.srt`; a file without an
    /// extension just gets the suffix appended.
    pub fn generate_output_path<P: AsRef<Path>>(input: P, suffix: &str) -> PathBuf {
        let input = input.as_ref();
        let stem = input.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(suffix);
        if let Some(ext) = input.extension() {
            output_filename.push('.');
            output_filename.push_str(&ext.to_string_lossy());
        }

        input.with_file_name(output_filename)
    }

    /// Read a file as UTF-8, replacing invalid sequences with U+FFFD
    pub fn read_to_string_lossy<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                FileError::NotFound { path: path.to_path_buf() }
            } else {
                FileError::ReadFailure { path: path.to_path_buf(), source }
            }
        })?;

        let content = String::from_utf8_lossy(&bytes);
        if content.contains(char::REPLACEMENT_CHARACTER) {
            debug!("Replaced invalid UTF-8 sequences while reading {:?}", path);
        }
        Ok(content.into_owned())
    }

    /// Write a string to a file, creating parent directories first
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FileError> {
        let path = path.as_ref();
        let write_failure = |source| FileError::WriteFailure { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent).map_err(write_failure)?;
        }
        fs::write(path, content).map_err(write_failure)
    }

    /// Write a string to standard output
    pub fn write_to_stdout(content: &str) -> Result<(), FileError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| FileError::WriteFailure { path: PathBuf::from("-"), source })
    }
}
