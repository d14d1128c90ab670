// crates/strip_marker_blocks/src/lib.rs

//! Removes marker-delimited blocks from a text buffer.
//!
//! A block runs from an occurrence of the start marker through the nearest
//! following occurrence of the end marker, both inclusive. Markers are matched
//! literally wherever they occur; a start marker with no later end marker is
//! left alone.

use std::ops::Range;

use import_failure_marker::{IMPORT_FAILURES_END, IMPORT_FAILURES_START};

pub mod whitespace;

use whitespace::{
    collapse_blank_run_at, current_line, is_horizontal_whitespace, trim_trailing_horizontal,
};

/// The pair of literal strings bounding a removable block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerPair {
    pub start_marker: String,
    pub end_marker: String,
}

impl MarkerPair {
    pub fn new(start_marker: impl Into<String>, end_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
        }
    }

    /// Empty markers would match everywhere, so they never match at all.
    fn is_usable(&self) -> bool {
        !self.start_marker.is_empty() && !self.end_marker.is_empty()
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self::new(IMPORT_FAILURES_START, IMPORT_FAILURES_END)
    }
}

/// Result of a strip: the cleaned buffer plus how many blocks went away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    pub blocks_removed: usize,
}

impl Stripped {
    pub fn is_unchanged(&self) -> bool {
        self.blocks_removed == 0
    }
}

/// Strips every block delimited by a [`MarkerPair`] from text buffers.
#[derive(Clone, Debug, Default)]
pub struct BlockStripper {
    markers: MarkerPair,
}

impl BlockStripper {
    pub fn new(markers: MarkerPair) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerPair {
        &self.markers
    }

    /// Returns `text` with all blocks removed and the junctions normalized.
    pub fn strip(&self, text: &str) -> String {
        self.strip_counted(text).text
    }

    /// Like [`strip`](Self::strip), also reporting the number of removed blocks.
    ///
    /// Passes are repeated until one removes nothing, so joining the two sides
    /// of a removal can never leave a fresh marker pair behind.
    pub fn strip_counted(&self, text: &str) -> Stripped {
        let mut stripped = Stripped {
            text: text.to_string(),
            blocks_removed: 0,
        };
        while let Some((cleaned, removed)) = strip_pass(&stripped.text, &self.markers) {
            stripped.text = cleaned;
            stripped.blocks_removed += removed;
        }
        stripped
    }

    /// Byte spans (marker to marker, inclusive) of the blocks in `text`.
    pub fn find_blocks(&self, text: &str) -> Vec<Range<usize>> {
        let mut blocks = Vec::new();
        if !self.markers.is_usable() {
            return blocks;
        }
        let mut cursor = 0;
        while let Some(block) = next_block(text, cursor, &self.markers) {
            cursor = block.end;
            blocks.push(block);
        }
        blocks
    }

    pub fn count_blocks(&self, text: &str) -> usize {
        self.find_blocks(text).len()
    }

    pub fn contains_block(&self, text: &str) -> bool {
        self.markers.is_usable() && next_block(text, 0, &self.markers).is_some()
    }
}

/// Removes every `start_marker` .. `end_marker` block from `text`.
pub fn strip_marker_blocks(text: &str, start_marker: &str, end_marker: &str) -> String {
    BlockStripper::new(MarkerPair::new(start_marker, end_marker)).strip(text)
}

/// Two-phase scan: next start marker at or after `from`, then the next end
/// marker after it.
fn next_block(text: &str, from: usize, markers: &MarkerPair) -> Option<Range<usize>> {
    let start = from + text[from..].find(markers.start_marker.as_str())?;
    let body = start + markers.start_marker.len();
    let end = body + text[body..].find(markers.end_marker.as_str())?;
    Some(start..end + markers.end_marker.len())
}

/// One left-to-right scan. `None` when nothing was found.
fn strip_pass(text: &str, markers: &MarkerPair) -> Option<(String, usize)> {
    if !markers.is_usable() {
        return None;
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut removed = 0;
    while let Some(block) = next_block(text, cursor, markers) {
        out.push_str(&text[cursor..block.start]);
        cursor = join_after_removal(&mut out, text, block.end);
        removed += 1;
    }
    if removed == 0 {
        return None;
    }
    out.push_str(&text[cursor..]);
    Some((out, removed))
}

/// Fixes up the junction left by a block that ended at `block_end`.
///
/// `out` holds everything emitted before the block. Returns the offset in
/// `text` where copying resumes.
fn join_after_removal(out: &mut String, text: &str, block_end: usize) -> usize {
    let rest = &text[block_end..];
    let line_end = rest.find('\n');
    let tail = &rest[..line_end.unwrap_or(rest.len())];

    let starts_line = current_line(out).chars().all(is_horizontal_whitespace);
    let ends_line = tail
        .chars()
        .all(|c| is_horizontal_whitespace(c) || c == '\r');

    match (starts_line, ends_line) {
        (true, true) => {
            // The block owns its lines: drop them, terminator included.
            let line_start = out.len() - current_line(out).len();
            out.truncate(line_start);
            let resume = block_end + line_end.map_or(rest.len(), |idx| idx + 1);
            resume + collapse_blank_run_at(out, &text[resume..])
        }
        (false, true) => {
            trim_trailing_horizontal(out);
            let Some(idx) = line_end else {
                return block_end + leading_horizontal_len(tail);
            };
            // Keep the line terminator, then tidy the lines that follow.
            out.push_str(tail.trim_start_matches(is_horizontal_whitespace));
            out.push('\n');
            let resume = block_end + idx + 1;
            resume + collapse_blank_run_at(out, &text[resume..])
        }
        (true, false) => {
            // The text after the block moves up to take its place, indent kept.
            let indent_len = current_line(out).len();
            let indent = out.split_off(out.len() - indent_len);
            let resume = block_end + leading_horizontal_len(rest);
            let skip = collapse_blank_run_at(out, &text[resume..]);
            out.push_str(&indent);
            resume + skip
        }
        (false, false) => {
            if out.ends_with(is_horizontal_whitespace) {
                block_end + leading_horizontal_len(rest)
            } else {
                block_end
            }
        }
    }
}

fn leading_horizontal_len(text: &str) -> usize {
    text.len() - text.trim_start_matches(is_horizontal_whitespace).len()
}
