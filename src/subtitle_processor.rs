use std::fmt;
use std::str::FromStr;
use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;
use crate::errors::SubtitleError;

// @module: Subtitle parsing and rendering

// @const: Bare SRT timestamp
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}$").unwrap()
});

// @const: Full timecode line, matched against the trimmed line
static TIMECODE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3})\s*-->\s*([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3})$").unwrap()
});

/// An SRT timestamp (`HH:MM:SS,mmm`) kept as its verbatim text.
///
/// No arithmetic is ever done on it; the only guarantee is that the text
/// matches the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timecode(String);

impl Timecode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Timecode {
    type Err = SubtitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if TIMECODE_REGEX.is_match(s) {
            Ok(Timecode(s.to_string()))
        } else {
            Err(SubtitleError::InvalidTimecode(s.to_string()))
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Sequence number as found in the source
    pub index: usize,

    // @field: Start timestamp
    pub start: Timecode,

    // @field: End timestamp
    pub end: Timecode,

    // @field: Whitespace-normalized caption text
    pub text: String,
}

impl Cue {
    /// Creates a cue, collapsing whitespace in `text`
    pub fn new(index: usize, start: Timecode, end: Timecode, text: impl AsRef<str>) -> Self {
        Cue {
            index,
            start,
            end,
            text: normalize_text(text.as_ref()),
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_block(f, self.index, &self.start, &self.end, &self.text)
    }
}

/// Writes one SRT block without the separating blank line
pub(crate) fn write_block(
    f: &mut fmt::Formatter,
    index: usize,
    start: &Timecode,
    end: &Timecode,
    text: &str,
) -> fmt::Result {
    writeln!(f, "{}", index)?;
    writeln!(f, "{} --> {}", start, end)?;
    writeln!(f, "{}", text)
}

/// Collapse every whitespace run (newlines included) into one space and trim
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A block located by [`BlockScanner`], before its text is normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// 1-based line number of the index line
    pub line_number: usize,
    pub index: usize,
    pub start: &'a str,
    pub end: &'a str,
    pub text_lines: Vec<&'a str>,
}

impl RawBlock<'_> {
    pub fn into_cue(self) -> Cue {
        // Both timestamps were matched by TIMECODE_LINE_REGEX
        Cue {
            index: self.index,
            start: Timecode(self.start.to_string()),
            end: Timecode(self.end.to_string()),
            text: normalize_text(&self.text_lines.join("\n")),
        }
    }
}

/// Line-oriented matcher for SRT blocks.
///
/// A block is an index line, immediately followed by a timecode line,
/// followed by text lines up to the next empty line or end of input.
/// Anything that does not fit is stepped over one line at a time, so a
/// malformed block never hides the well-formed blocks after it.
pub struct BlockScanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    skipped_lines: usize,
}

impl<'a> BlockScanner<'a> {
    pub fn new(content: &'a str) -> Self {
        BlockScanner {
            lines: content.lines().collect(),
            pos: 0,
            skipped_lines: 0,
        }
    }

    /// Non-blank lines that were not part of any block so far
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    // @returns: Block starting at `pos` and the line after its text
    fn match_block_at(&self, pos: usize) -> Option<(RawBlock<'a>, usize)> {
        let index = parse_index_line(self.lines[pos])?;
        let timecode_line: &'a str = self.lines.get(pos + 1).copied()?;
        let (start, end) = parse_timecode_line(timecode_line)?;

        let text_start = pos + 2;
        let text_end = self.lines[text_start..]
            .iter()
            .position(|line| is_empty_line(line))
            .map_or(self.lines.len(), |offset| text_start + offset);

        let block = RawBlock {
            line_number: pos + 1,
            index,
            start,
            end,
            text_lines: self.lines[text_start..text_end].to_vec(),
        };
        Some((block, text_end))
    }
}

impl<'a> Iterator for BlockScanner<'a> {
    type Item = RawBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.lines.len() {
            if let Some((block, next_pos)) = self.match_block_at(self.pos) {
                self.pos = next_pos;
                return Some(block);
            }

            if !is_blank(self.lines[self.pos]) {
                self.skipped_lines += 1;
            }
            self.pos += 1;
        }
        None
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

// @checks: Block separator; a line holding only spaces is still caption text
fn is_empty_line(line: &str) -> bool {
    line.is_empty() || line == "\r"
}

fn parse_index_line(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_timecode_line(line: &str) -> Option<(&str, &str)> {
    let caps = TIMECODE_LINE_REGEX.captures(line.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Parse SRT content into cues, in source order.
///
/// Never fails: malformed blocks are skipped and an empty or unrecognizable
/// input simply yields no cues.
pub fn parse_cues(content: &str) -> Vec<Cue> {
    let mut scanner = BlockScanner::new(content);
    let cues: Vec<Cue> = scanner.by_ref().map(RawBlock::into_cue).collect();

    if scanner.skipped_lines() > 0 {
        debug!("Skipped {} line(s) outside well-formed blocks", scanner.skipped_lines());
    }
    debug!("Parsed {} cue(s)", cues.len());

    cues
}

/// Render cues as SRT text: blocks separated by one blank line, ending
/// with exactly one line break.
pub fn render_cues<T: fmt::Display>(cues: &[T]) -> String {
    let blocks: Vec<String> = cues.iter().map(|cue| cue.to_string()).collect();
    let mut output = blocks.join("\n").trim_end().to_string();
    output.push('\n');
    output
}
