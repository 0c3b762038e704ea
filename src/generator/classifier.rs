//! Input line classification.
//!
//! A line with no leading whitespace names a category; a line indented with
//! spaces or tabs names a trace point relative to the tracefs `events` dir.

use crate::utils::config::TRACE_POINT_MARKERS;

/// A single classified line of the categories file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine<'a> {
    /// Free-form category label, rendered only as a comment
    Category(&'a str),

    /// Event path such as `sched/sched_switch`, leading indent removed
    TracePoint(&'a str),
}

/// Classify one line (terminator already stripped)
///
/// **Public** - pure, position-independent. A trace point with no preceding
/// category is still a trace point.
pub fn classify_line(line: &str) -> InputLine<'_> {
    if line.starts_with(TRACE_POINT_MARKERS) {
        InputLine::TracePoint(line.trim_start_matches(TRACE_POINT_MARKERS))
    } else {
        InputLine::Category(line)
    }
}

/// Split a chunk from `BufRead::read_line` into lines
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The chunk holds at most one
/// `\n` (at its end), so any other `\r` inside it is a line break of its own.
/// Terminators are dropped; every other character, including trailing
/// spaces, is kept.
pub fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    let body = match chunk.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        // Last chunk without a newline; a trailing lone `\r` still ends it
        None => chunk.strip_suffix('\r').unwrap_or(chunk),
    };
    body.split('\r')
}
