/*!
 * # cuemerge - sentence-aware SRT cue merging
 *
 * A Rust library and CLI that joins SubRip subtitle cues into
 * sentence-complete groups, plus a companion tool that inserts paragraph
 * breaks into plain text.
 *
 * ## Features
 *
 * - Forgiving SRT parser: malformed blocks are skipped, never fatal
 * - Greedy merging of consecutive cues until the text ends a sentence
 * - Timestamps kept verbatim, no timing arithmetic
 * - Optional JSON configuration shared by both binaries
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: Cue model, block scanner and SRT renderer
 * - `cue_merger`: Sentence detection and cue folding
 * - `paragraphs`: Paragraph break insertion for plain text
 * - `app_controller`: One read-transform-write run per invocation
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `logging`: Stderr logger backend for the `log` facade
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cue_merger;
pub mod errors;
pub mod file_utils;
pub mod logging;
pub mod paragraphs;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, OutputTarget};
pub use cue_merger::{merge_cues, join_text, CueMerger, MergedCue, MergeStats, SentenceTerminators};
pub use subtitle_processor::{parse_cues, render_cues, Cue, Timecode};
pub use errors::{AppError, FileError, SubtitleError};
