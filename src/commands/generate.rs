//! Generate command implementation.
//!
//! Reads the categories file and streams the rc fragment to stdout.
//! Diagnostics go to stderr through `log`, so stdout can be redirected
//! straight into the target `.rc` file.

use crate::generator::generate_rc_file;
use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the generate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Path to the atrace_categories.txt file
    pub input: PathBuf,
}

/// Execute the generate command against stdout
///
/// **Public** - main entry point called from main.rs
pub fn execute_generate(args: &GenerateArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    execute_generate_to(args, &mut out)?;

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Execute the generate command against any writer
///
/// **Public** - lets callers capture the fragment instead of printing it
pub fn execute_generate_to<W: Write>(args: &GenerateArgs, writer: &mut W) -> Result<()> {
    let start_time = Instant::now();

    let summary = generate_rc_file(&args.input, writer).map_err(|e| {
        let message = if e.is_input_error() {
            format!("Cannot read categories file {}", args.input.display())
        } else {
            format!("Failed to write rc fragment for {}", args.input.display())
        };
        anyhow::Error::new(e).context(message)
    })?;

    info!("{}", summary.summary());
    info!(
        "Generation completed in {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate generate arguments
///
/// **Public** - can be called before execute_generate for early validation
pub fn validate_args(args: &GenerateArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input filename cannot be empty");
    }

    Ok(())
}
