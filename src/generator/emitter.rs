//! Rendering of the init script fragment.

use super::classifier::{classify_line, split_lines, InputLine};
use crate::utils::config::{
    CATEGORY_SUFFIX, CHMOD_COMMAND, EVENT_ENABLE_FILE, INDENT, PREAMBLE_COMMENT,
    PREAMBLE_TRIGGER, TRACEFS_ROOTS,
};
use crate::utils::error::GenerateError;
use log::{debug, trace};
use std::io::{self, BufRead, Write};

/// Counters gathered during one generation pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RcSummary {
    /// Category header lines seen
    pub categories: usize,

    /// Trace point lines seen
    pub trace_points: usize,

    /// Output lines written, preamble included
    pub lines_written: usize,
}

impl RcSummary {
    /// One-line description for logging
    pub fn summary(&self) -> String {
        format!(
            "{} categories, {} trace points, {} lines written",
            self.categories, self.trace_points, self.lines_written
        )
    }
}

/// Write the fixed two-line preamble
pub fn write_preamble<W: Write>(writer: &mut W) -> io::Result<usize> {
    writeln!(writer, "{}", PREAMBLE_COMMENT)?;
    writeln!(writer, "{}", PREAMBLE_TRIGGER)?;
    Ok(2)
}

/// Render a classified line, returning the number of lines written
///
/// **Public** - categories become one comment, trace points one chmod per
/// tracefs root.
pub fn render_line<W: Write>(line: InputLine<'_>, writer: &mut W) -> io::Result<usize> {
    match line {
        InputLine::Category(name) => {
            writeln!(writer, "{INDENT}# {name} {CATEGORY_SUFFIX}")?;
            Ok(1)
        }
        InputLine::TracePoint(path) => {
            for root in TRACEFS_ROOTS {
                writeln!(
                    writer,
                    "{INDENT}{CHMOD_COMMAND} {root}/{path}/{EVENT_ENABLE_FILE}"
                )?;
            }
            Ok(TRACEFS_ROOTS.len())
        }
    }
}

/// Transform a categories stream into the rc fragment
///
/// **Public** - main library entry point
///
/// # Arguments
/// * `reader` - categories file contents, read line by line
/// * `writer` - destination of the generated script
///
/// # Errors
/// * `GenerateError::ReadFailed` - I/O or UTF-8 error on a line
/// * `GenerateError::WriteFailed` - writer rejected output
///
/// # Example
/// ```ignore
/// let input = "gfx\n  power/clock_set_rate\n";
/// let mut out = Vec::new();
/// generate_rc(input.as_bytes(), &mut out)?;
/// ```
pub fn generate_rc<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
) -> Result<RcSummary, GenerateError> {
    let mut summary = RcSummary {
        lines_written: write_preamble(writer).map_err(GenerateError::WriteFailed)?,
        ..Default::default()
    };

    let mut buf = String::new();
    let mut line_no = 0;

    loop {
        buf.clear();

        let read = reader
            .read_line(&mut buf)
            .map_err(|source| GenerateError::ReadFailed {
                line: line_no + 1,
                source,
            })?;
        if read == 0 {
            break;
        }

        for text in split_lines(&buf) {
            line_no += 1;

            let line = classify_line(text);
            trace!("line {}: {:?}", line_no, line);

            match line {
                InputLine::Category(_) => summary.categories += 1,
                InputLine::TracePoint(_) => summary.trace_points += 1,
            }

            summary.lines_written +=
                render_line(line, writer).map_err(GenerateError::WriteFailed)?;
        }
    }

    writer.flush().map_err(GenerateError::WriteFailed)?;

    debug!("Generated rc fragment: {}", summary.summary());

    Ok(summary)
}
