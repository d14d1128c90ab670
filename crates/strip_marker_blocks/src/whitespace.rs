// crates/strip_marker_blocks/src/whitespace.rs

//! Helpers that keep the text around a removed block tidy.

/// Space or tab. Line terminators are handled by the callers.
pub fn is_horizontal_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// A line made of nothing but whitespace. A trailing `\r` counts as whitespace.
pub fn is_blank_line(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// The unterminated last line of `text`, i.e. everything after the final `\n`.
pub fn current_line(text: &str) -> &str {
    match text.rfind('\n') {
        Some(idx) => &text[idx + 1..],
        None => text,
    }
}

/// Removes spaces and tabs from the end of `text` in place.
pub fn trim_trailing_horizontal(text: &mut String) {
    let keep = text.trim_end_matches(is_horizontal_whitespace).len();
    text.truncate(keep);
}

/// Number of complete blank lines at the end of `text`.
///
/// Only terminated lines are counted, so `text` is expected to end with `\n`
/// (anything else yields zero).
pub fn count_trailing_blank_lines(text: &str) -> usize {
    match text.strip_suffix('\n') {
        Some(body) => body.rsplit('\n').take_while(|line| is_blank_line(line)).count(),
        None => 0,
    }
}

/// Byte offsets just past each terminated blank line at the start of `text`.
fn leading_blank_line_ends(text: &str) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut offset = 0;
    while let Some(idx) = text[offset..].find('\n') {
        if !is_blank_line(&text[offset..offset + idx]) {
            break;
        }
        offset += idx + 1;
        ends.push(offset);
    }
    ends
}

/// Number of complete blank lines at the start of `text`.
pub fn count_leading_blank_lines(text: &str) -> usize {
    leading_blank_line_ends(text).len()
}

fn drop_trailing_lines(text: &mut String, count: usize) {
    for _ in 0..count {
        let Some(body) = text.strip_suffix('\n') else {
            return;
        };
        let cut = body.rfind('\n').map_or(0, |idx| idx + 1);
        text.truncate(cut);
    }
}

/// Collapses the blank-line run that meets at a junction.
///
/// `out` is the text already emitted (ending at a line start) and `rest` is the
/// text still to come. If the blank lines on both sides add up to more than one,
/// exactly one is kept: the first of the run in `out` when there is one,
/// otherwise the last of the run in `rest`. Returns how many bytes of `rest`
/// the caller must skip.
pub fn collapse_blank_run_at(out: &mut String, rest: &str) -> usize {
    let before = count_trailing_blank_lines(out);
    let after = leading_blank_line_ends(rest);
    if before + after.len() <= 1 {
        return 0;
    }
    if before > 0 {
        drop_trailing_lines(out, before - 1);
        after.last().copied().unwrap_or(0)
    } else {
        after[after.len() - 2]
    }
}
