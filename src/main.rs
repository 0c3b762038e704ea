//! ftrace-rc-gen CLI
//!
//! Generates the vendor ftrace permissions `.rc` fragment from a categories
//! file and prints it to stdout.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use ftrace_rc_gen::commands::{execute_generate, validate_args, GenerateArgs};

/// Generates an .rc file that fixes the permissions for all the ftrace events
/// listed in the input atrace_categories.txt file
#[derive(Parser, Debug)]
#[command(name = "ftrace-rc-gen")]
#[command(long_about = None)]
struct Cli {
    /// Path to the atrace_categories.txt file
    filename: PathBuf,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stderr only, quiet unless RUST_LOG says otherwise
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = GenerateArgs {
        input: cli.filename,
    };

    validate_args(&args)?;
    execute_generate(&args)?;

    Ok(())
}
