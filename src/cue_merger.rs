use std::fmt;
use log::{debug, info};
use crate::app_config::MergeConfig;
use crate::subtitle_processor::{write_block, Cue, Timecode};

// @module: Sentence-based cue merging

/// Characters that close a sentence: `.` `?` `!` `:` `,` and the right
/// double quotation mark.
pub const DEFAULT_TERMINATORS: [char; 6] = ['.', '?', '!', ':', ',', '\u{201D}'];

/// Set of characters that mark a text as sentence-complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceTerminators {
    chars: Vec<char>,
}

impl Default for SentenceTerminators {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS)
    }
}

impl SentenceTerminators {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        SentenceTerminators {
            chars: chars.into_iter().collect(),
        }
    }

    /// Default set with `,` and `:` removed, so they keep a cue open
    pub fn without_comma_and_colon() -> Self {
        Self::new(DEFAULT_TERMINATORS.into_iter().filter(|c| !matches!(c, ',' | ':')))
    }

    pub fn from_config(config: &MergeConfig) -> Self {
        if config.comma_and_colon_terminal {
            Self::default()
        } else {
            Self::without_comma_and_colon()
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// True when the last non-whitespace character is a terminator
    pub fn is_sentence_complete(&self, text: &str) -> bool {
        text.trim_end()
            .chars()
            .next_back()
            .is_some_and(|last| self.chars.contains(&last))
    }
}

/// Join two caption texts with exactly one space between them.
///
/// An empty side returns the other side unchanged. When either side already
/// carries whitespace at the seam, no space is added and the result is trimmed.
pub fn join_text(acc: &str, add: &str) -> String {
    if acc.is_empty() {
        return add.to_string();
    }
    if add.is_empty() {
        return acc.to_string();
    }

    let acc_ends_with_space = acc.chars().next_back().is_some_and(char::is_whitespace);
    let add_starts_with_space = add.chars().next().is_some_and(char::is_whitespace);
    if acc_ends_with_space || add_starts_with_space {
        return format!("{}{}", acc, add).trim().to_string();
    }

    format!("{} {}", acc, add)
}

// @struct: One or more consecutive cues folded together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedCue {
    // @field: Index of the first folded cue
    pub index: usize,

    // @field: Start of the first folded cue
    pub start: Timecode,

    // @field: End of the last folded cue
    pub end: Timecode,

    // @field: Joined text of all folded cues
    pub text: String,

    // @field: How many source cues were folded
    pub cue_count: usize,
}

impl MergedCue {
    // @creates: Group holding a single cue
    fn open(cue: &Cue) -> Self {
        MergedCue {
            index: cue.index,
            start: cue.start.clone(),
            end: cue.end.clone(),
            text: cue.text.clone(),
            cue_count: 1,
        }
    }

    // @extends: Group with the next cue; index and start stay fixed
    fn absorb(&mut self, cue: &Cue) {
        self.text = join_text(&self.text, &cue.text);
        self.end = cue.end.clone();
        self.cue_count += 1;
    }
}

impl From<MergedCue> for Cue {
    fn from(merged: MergedCue) -> Self {
        Cue {
            index: merged.index,
            start: merged.start,
            end: merged.end,
            text: merged.text,
        }
    }
}

impl fmt::Display for MergedCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_block(f, self.index, &self.start, &self.end, &self.text)
    }
}

/// Counters describing one merge pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub input_cues: usize,
    pub output_cues: usize,
    /// Groups emitted without a terminator (at most the trailing one)
    pub incomplete_groups: usize,
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Merged {} cue(s) into {} group(s), {} left incomplete",
            self.input_cues, self.output_cues, self.incomplete_groups
        )
    }
}

/// Greedy merger: a group stays open until its text is sentence-complete
#[derive(Debug, Clone, Default)]
pub struct CueMerger {
    terminators: SentenceTerminators,
}

impl CueMerger {
    pub fn new(terminators: SentenceTerminators) -> Self {
        CueMerger { terminators }
    }

    pub fn from_config(config: &MergeConfig) -> Self {
        Self::new(SentenceTerminators::from_config(config))
    }

    pub fn terminators(&self) -> &SentenceTerminators {
        &self.terminators
    }

    /// Fold consecutive cues into sentence-complete groups, keeping order
    pub fn merge(&self, cues: &[Cue]) -> Vec<MergedCue> {
        cues.iter().fold(Vec::with_capacity(cues.len()), |mut groups: Vec<MergedCue>, cue| {
            match groups.last_mut() {
                Some(open) if !self.terminators.is_sentence_complete(&open.text) => open.absorb(cue),
                _ => groups.push(MergedCue::open(cue)),
            }
            groups
        })
    }

    /// Same as [`CueMerger::merge`], also returning counters for logging
    pub fn merge_with_stats(&self, cues: &[Cue]) -> (Vec<MergedCue>, MergeStats) {
        let merged = self.merge(cues);
        let incomplete_groups = merged
            .iter()
            .filter(|group| !self.terminators.is_sentence_complete(&group.text))
            .count();

        let stats = MergeStats {
            input_cues: cues.len(),
            output_cues: merged.len(),
            incomplete_groups,
        };

        if log::max_level() >= log::LevelFilter::Debug {
            for group in merged.iter().filter(|group| group.cue_count > 1) {
                debug!("Group {} folded {} cues ({} --> {})",
                       group.index, group.cue_count, group.start, group.end);
            }
        }
        info!("{}", stats);

        (merged, stats)
    }
}

/// Merge with the default terminator set
pub fn merge_cues(cues: &[Cue]) -> Vec<MergedCue> {
    CueMerger::default().merge(cues)
}
