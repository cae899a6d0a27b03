// @module: Paragraph breaks for plain text

use crate::app_config::ParagraphConfig;

/// Turn every `"<mark> "` into `"<mark>\n\n"`, one mark at a time, in order.
///
/// Only punctuation followed by a space is touched; a mark at the end of a
/// line or of the text is left alone.
pub fn insert_paragraph_breaks(content: &str, marks: &[char]) -> String {
    marks.iter().fold(content.to_string(), |text, mark| {
        text.replace(&format!("{} ", mark), &format!("{}\n\n", mark))
    })
}

/// Apply the configured break marks
pub fn apply(content: &str, config: &ParagraphConfig) -> String {
    insert_paragraph_breaks(content, &config.break_after)
}
