//! Constants for the generated init script.

/// First line of every generated fragment
pub const PREAMBLE_COMMENT: &str = "# Sets permission for vendor ftrace events";

/// Init trigger the chmod commands run under
pub const PREAMBLE_TRIGGER: &str = "on late-init";

/// Indent applied to every command and comment inside the trigger block
pub const INDENT: &str = "    ";

/// chmod invocation prefix, mode included
pub const CHMOD_COMMAND: &str = "chmod 0666";

// Both tracefs mount points; which one exists depends on the kernel,
// so every event gets a chmod under each.
pub const TRACEFS_ROOTS: &[&str] = &[
    "/sys/kernel/debug/tracing/events",
    "/sys/kernel/tracing/events",
];

/// Control file under each event directory
pub const EVENT_ENABLE_FILE: &str = "enable";

/// Suffix of the comment emitted for a category header
pub const CATEGORY_SUFFIX: &str = "trace points";

/// Characters that mark a line as a trace point
pub const TRACE_POINT_MARKERS: &[char] = &[' ', '\t'];
