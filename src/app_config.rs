use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles loading and validating the JSON configuration
/// shared by the `cuemerge` and `paragraph_breaks` binaries.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Cue merging settings
    #[serde(default)]
    pub merge: MergeConfig,

    /// Paragraph break settings
    #[serde(default)]
    pub paragraphs: ParagraphConfig,
}

/// Cue merging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MergeConfig {
    // @field: Whether ',' and ':' end a sentence
    #[serde(default = "default_comma_and_colon_terminal")]
    pub comma_and_colon_terminal: bool,

    // @field: Suffix inserted before the extension of derived output paths
    #[serde(default = "default_merged_suffix")]
    pub merged_suffix: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            comma_and_colon_terminal: default_comma_and_colon_terminal(),
            merged_suffix: default_merged_suffix(),
        }
    }
}

/// Paragraph break configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParagraphConfig {
    // @field: Suffix inserted before the extension of the output path
    #[serde(default = "default_paragraph_suffix")]
    pub suffix: String,

    // @field: Punctuation followed by a space that gets a paragraph break
    #[serde(default = "default_break_after")]
    pub break_after: Vec<char>,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            suffix: default_paragraph_suffix(),
            break_after: default_break_after(),
        }
    }
}

/// Log level, shared by the config file and the `--log-level` flag
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_comma_and_colon_terminal() -> bool {
    true
}

fn default_merged_suffix() -> String {
    "merged".to_string()
}

fn default_paragraph_suffix() -> String {
    "after".to_string()
}

fn default_break_after() -> Vec<char> {
    vec!['.', '?']
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_suffix("merge.merged_suffix", &self.merge.merged_suffix)?;
        validate_suffix("paragraphs.suffix", &self.paragraphs.suffix)?;

        if self.paragraphs.break_after.is_empty() {
            return Err(anyhow!("paragraphs.break_after must list at least one character"));
        }

        Ok(())
    }
}

fn validate_suffix(name: &str, suffix: &str) -> Result<()> {
    if suffix.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", name));
    }
    if suffix.contains(['/', '\\']) {
        return Err(anyhow!("{} must not contain path separators: {}", name, suffix));
    }
    Ok(())
}
