//! Categories file to init `.rc` fragment generator.
//!
//! Input is the `atrace_categories.txt` layout: a category name on its own
//! line, followed by the trace points it covers, each indented:
//!
//! ```text
//! gfx
//!   power/clock_set_rate
//! ```
//!
//! Output is a `late-init` block that makes every listed event's `enable`
//! file world read/writable under both tracefs mount points.

pub mod classifier;
pub mod emitter;

pub use classifier::{classify_line, split_lines, InputLine};
pub use emitter::{generate_rc, render_line, write_preamble, RcSummary};

use crate::utils::error::GenerateError;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

/// Generate the fragment for a categories file on disk
///
/// **Public** - the file is opened before anything is written, so an
/// unreadable path leaves `writer` untouched. The handle is closed when this
/// returns, on success or error.
///
/// # Errors
/// * `GenerateError::InputUnavailable` - path missing, not permitted, or a directory
/// * `GenerateError::ReadFailed` / `GenerateError::WriteFailed` - see [`generate_rc`]
pub fn generate_rc_file<W: Write>(
    path: impl AsRef<Path>,
    writer: &mut W,
) -> Result<RcSummary, GenerateError> {
    let path = path.as_ref();

    info!("Reading categories from: {}", path.display());

    let file = open_input(path)?;
    generate_rc(BufReader::new(file), writer)
}

fn open_input(path: &Path) -> Result<File, GenerateError> {
    let unavailable = |source| GenerateError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;

    // Opening a directory succeeds on Unix; reject it before the preamble goes out
    if file.metadata().map_err(unavailable)?.is_dir() {
        return Err(unavailable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }

    Ok(file)
}
