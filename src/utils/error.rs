//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating the rc fragment
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot open input file {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read line {line} of input: {source}")]
    ReadFailed {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    WriteFailed(#[source] io::Error),
}

impl GenerateError {
    /// True when the input could not be opened or read
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GenerateError::InputUnavailable { .. } | GenerateError::ReadFailed { .. }
        )
    }
}
