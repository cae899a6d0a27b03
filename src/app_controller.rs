use std::fmt;
use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::app_config::Config;
use crate::cue_merger::{CueMerger, MergeStats};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::paragraphs;
use crate::subtitle_processor::{parse_cues, render_cues};

// @module: Application controller for both utilities

/// Where a run writes its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Merger built from the merge config
    merger: CueMerger,
}

impl Controller {
    // @method: Create a controller, rejecting invalid configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate().map_err(|e| AppError::Config(e.to_string()))?;
        let merger = CueMerger::from_config(&config.merge);
        Ok(Self { config, merger })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse, merge and render SRT content without touching the filesystem
    pub fn merge_content(&self, raw: &str) -> (String, MergeStats) {
        let cues = parse_cues(raw);
        if cues.is_empty() {
            warn!("No subtitle cues found in input");
        }
        let (merged, stats) = self.merger.merge_with_stats(&cues);
        (render_cues(&merged), stats)
    }

    /// `captions.srt` -> `captions.merged.srt` (suffix from config)
    pub fn merged_output_path(&self, input: &Path) -> PathBuf {
        FileManager::generate_output_path(input, &self.config.merge.merged_suffix)
    }

    /// `trapping.txt` -> `trapping.after.txt` (suffix from config)
    pub fn paragraph_output_path(&self, input: &Path) -> PathBuf {
        FileManager::generate_output_path(input, &self.config.paragraphs.suffix)
    }

    /// Merge one subtitle file into `output`
    pub fn run(&self, input: &Path, output: &OutputTarget) -> Result<MergeStats, AppError> {
        let raw = FileManager::read_to_string_lossy(input)?;
        let (rendered, stats) = self.merge_content(&raw);

        match output {
            OutputTarget::Stdout => FileManager::write_to_stdout(&rendered)?,
            OutputTarget::File(path) => FileManager::write_to_file(path, &rendered)?,
        }
        info!("Wrote merged subtitles to {}", output);

        Ok(stats)
    }

    /// Insert paragraph breaks into a text file and return the output path
    pub fn run_paragraphs(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf, AppError> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.paragraph_output_path(input));

        let content = FileManager::read_to_string_lossy(input)?;
        let cleaned = paragraphs::apply(&content, &self.config.paragraphs);
        FileManager::write_to_file(&output, &cleaned)?;

        info!("Cleaned content saved to {}", output.display());
        Ok(output)
    }
}
