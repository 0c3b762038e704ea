//! ftrace-rc-gen
//!
//! Turns an `atrace_categories.txt` listing into an init `.rc` fragment that
//! sets `0666` on each listed ftrace event's `enable` file at `late-init`.
//!
//! ```bash
//! ftrace-rc-gen atrace_categories.txt > ftrace_permissions.rc
//! ```

pub mod commands;
pub mod generator;
pub mod utils;
