/*!
 * Tests for paragraph break insertion
 */

use cuemerge::app_config::ParagraphConfig;
use cuemerge::paragraphs::{apply, insert_paragraph_breaks};

/// Test the default marks
#[test]
fn test_insert_paragraph_breaks_withPeriodAndQuestion_shouldBreakAfterSpace() {
    let text = "First sentence. Second one? Third one! Done.";
    assert_eq!(
        apply(text, &ParagraphConfig::default()),
        "First sentence.\n\nSecond one?\n\nThird one! Done."
    );
}

/// Test that punctuation without a following space is untouched
#[test]
fn test_insert_paragraph_breaks_withoutTrailingSpace_shouldLeaveTextAlone() {
    let text = "Version 1.2 is out.\nSee you?";
    assert_eq!(insert_paragraph_breaks(text, &['.', '?']), "Version 1.2 is out.\nSee you?");
}

/// Test that each occurrence is replaced and only the first space is consumed
#[test]
fn test_insert_paragraph_breaks_withRepeatedSpaces_shouldReplaceEachOccurrence() {
    assert_eq!(insert_paragraph_breaks("A.  B. C", &['.']), "A.\n\n B.\n\nC");
}

/// Test custom marks
#[test]
fn test_insert_paragraph_breaks_withCustomMarks_shouldUseThem() {
    assert_eq!(insert_paragraph_breaks("Wait; go! Now.", &[';', '!']), "Wait;\n\ngo!\n\nNow.");
    assert_eq!(insert_paragraph_breaks("", &['.']), "");
}
