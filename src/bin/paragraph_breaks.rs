use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use cuemerge::app_config::{Config, LogLevel};
use cuemerge::app_controller::Controller;
use cuemerge::logging::StderrLogger;

/// Insert a blank line after every ". " and "? " in a text file.
///
/// The result is written next to the input with a suffix inserted before the
/// extension: trapping.txt becomes trapping.after.txt.
#[derive(Parser, Debug)]
#[command(name = "paragraph_breaks")]
#[command(version)]
struct Args {
    /// Input text file
    #[arg(value_name = "INPUT_PATH", default_value = "trapping.txt")]
    input_path: PathBuf,

    /// Suffix inserted before the extension of the output file
    #[arg(short, long)]
    suffix: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    StderrLogger::init(LevelFilter::Info)?;

    let args = Args::parse();

    let mut config = Config::load(&args.config_path)?;
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    if let Some(suffix) = args.suffix {
        config.paragraphs.suffix = suffix;
    }
    StderrLogger::set_level(config.log_level.into());

    let controller = Controller::with_config(config)?;
    controller.run_paragraphs(&args.input_path, None)?;
    Ok(())
}
