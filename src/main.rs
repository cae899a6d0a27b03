// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::LevelFilter;
use std::path::PathBuf;

use cuemerge::app_config::{Config, LogLevel};
use cuemerge::app_controller::{Controller, OutputTarget};
use cuemerge::logging::StderrLogger;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for cuemerge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// cuemerge - join SRT cues into sentence-complete groups
///
/// Reads a SubRip file, folds consecutive cues together until each group
/// ends with sentence punctuation, and writes the result as SubRip again.
#[derive(Parser, Debug)]
#[command(name = "cuemerge")]
#[command(version)]
#[command(about = "Merge SRT subtitle cues into sentence-complete groups")]
#[command(long_about = "cuemerge reads a SubRip (.srt) file and merges consecutive cues until the
text ends with one of . ? ! : , or a closing quotation mark. Timestamps are
copied verbatim: a merged cue starts where its first cue starts and ends where
its last cue ends.

EXAMPLES:
    cuemerge captions.srt                       # Print merged cues to stdout
    cuemerge -o out.srt captions.srt            # Write to out.srt
    cuemerge -d captions.srt                    # Write to captions.merged.srt
    cuemerge --keep-comma-colon-open in.srt     # Only . ? ! and quotes end a cue
    cuemerge completions bash > cuemerge.bash   # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json when it exists. Use --config-path to point
    at a different file. Command line flags override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file
    #[arg(value_name = "INPUT_PATH", default_value = "captions.srt")]
    input_path: PathBuf,

    /// Write the merged subtitles to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_PATH", conflicts_with = "derive_output")]
    output: Option<PathBuf>,

    /// Write next to the input, inserting the merged suffix before the extension
    #[arg(short, long)]
    derive_output: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,

    /// Do not treat ',' and ':' as the end of a sentence
    #[arg(long)]
    keep_comma_colon_open: bool,
}

fn main() -> Result<()> {
    // Start at info; the config or --log-level may change it below
    StderrLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "cuemerge", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load(&cli.config_path)?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    if cli.keep_comma_colon_open {
        config.merge.comma_and_colon_terminal = false;
    }
    StderrLogger::set_level(config.log_level.into());

    let controller = Controller::with_config(config)?;

    let output = match cli.output {
        Some(path) => OutputTarget::File(path),
        None if cli.derive_output => OutputTarget::File(controller.merged_output_path(&cli.input_path)),
        None => OutputTarget::Stdout,
    };

    controller.run(&cli.input_path, &output)?;
    Ok(())
}
