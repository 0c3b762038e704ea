//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod generate;

// Re-export main command functions
pub use generate::{execute_generate, execute_generate_to, validate_args, GenerateArgs};
