/*!
 * Integration tests for the merge workflow through the controller
 */

use std::fs;
use anyhow::Result;
use cuemerge::app_config::Config;
use cuemerge::app_controller::{Controller, OutputTarget};
use cuemerge::errors::{AppError, FileError};
use cuemerge::subtitle_processor::parse_cues;
use crate::common;

/// Test the full read-merge-write cycle
#[test]
fn test_controller_run_withSampleFile_shouldWriteMergedSubtitles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "captions.srt")?;
    let controller = Controller::with_config(Config::default())?;

    let output = controller.merged_output_path(&input);
    assert_eq!(output, temp_dir.path().join("captions.merged.srt"));

    let stats = controller.run(&input, &OutputTarget::File(output.clone()))?;
    assert_eq!(stats.input_cues, 5);
    assert_eq!(stats.output_cues, 3);
    assert_eq!(stats.incomplete_groups, 1);

    assert_eq!(fs::read_to_string(&output)?, common::SAMPLE_MERGED_SRT);

    Ok(())
}

/// Test that merging merged output changes nothing
#[test]
fn test_controller_merge_content_withMergedOutput_shouldBeStable() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    let (once, _) = controller.merge_content(common::SAMPLE_SRT);
    let (twice, stats) = controller.merge_content(&once);

    assert_eq!(once, twice);
    assert_eq!(stats.input_cues, stats.output_cues);

    Ok(())
}

/// Test the comma/colon setting end to end
#[test]
fn test_controller_merge_content_withCommaColonOpen_shouldMergeAcrossCommas() -> Result<()> {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nWe need:\n\n\
                   2\n00:00:02,000 --> 00:00:03,000\neggs,\n\n\
                   3\n00:00:03,000 --> 00:00:04,000\nmilk.\n";

    let default_controller = Controller::with_config(Config::default())?;
    let (_, stats) = default_controller.merge_content(content);
    assert_eq!(stats.output_cues, 3);

    let mut config = Config::default();
    config.merge.comma_and_colon_terminal = false;
    let strict_controller = Controller::with_config(config)?;
    let (rendered, stats) = strict_controller.merge_content(content);
    assert_eq!(stats.output_cues, 1);
    assert_eq!(rendered, "1\n00:00:01,000 --> 00:00:04,000\nWe need: eggs, milk.\n");

    Ok(())
}

/// Test that garbage input produces an empty document, not an error
#[test]
fn test_controller_run_withGarbageInput_shouldWriteEmptyOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "garbage.srt", "not a subtitle\nat all\n")?;
    let output = temp_dir.path().join("out.srt");
    let controller = Controller::with_config(Config::default())?;

    let stats = controller.run(&input, &OutputTarget::File(output.clone()))?;
    assert_eq!(stats.input_cues, 0);
    assert_eq!(fs::read_to_string(&output)?, "\n");
    assert!(parse_cues(&fs::read_to_string(&output)?).is_empty());

    Ok(())
}

/// Test missing input file
#[test]
fn test_controller_run_withMissingInput_shouldFailWithNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("out.srt");
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run(&temp_dir.path().join("missing.srt"), &OutputTarget::File(output.clone()));
    assert!(matches!(result, Err(AppError::File(FileError::NotFound { .. }))));
    assert!(!output.exists());

    Ok(())
}

/// Test unwritable output
#[test]
fn test_controller_run_withDirectoryAsOutput_shouldFailWithWriteFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "captions.srt")?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run(&input, &OutputTarget::File(temp_dir.path().to_path_buf()));
    assert!(matches!(result, Err(AppError::File(FileError::WriteFailure { .. }))));

    Ok(())
}

/// Test invalid configuration is rejected up front
#[test]
fn test_controller_with_config_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.paragraphs.suffix.clear();

    assert!(matches!(Controller::with_config(config), Err(AppError::Config(_))));
}

/// Test the paragraph run
#[test]
fn test_controller_run_paragraphs_withTextFile_shouldWriteSuffixedFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "trapping.txt", "One. Two? Three.")?;
    let controller = Controller::with_config(Config::default())?;

    let output = controller.run_paragraphs(&input, None)?;
    assert_eq!(output, temp_dir.path().join("trapping.after.txt"));
    assert_eq!(fs::read_to_string(&output)?, "One.\n\nTwo?\n\nThree.");

    let explicit = temp_dir.path().join("explicit.txt");
    assert_eq!(controller.run_paragraphs(&input, Some(&explicit))?, explicit);
    assert!(explicit.exists());

    Ok(())
}
