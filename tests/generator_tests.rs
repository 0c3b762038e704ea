use ftrace_rc_gen::generator::{generate_rc, generate_rc_file};
use ftrace_rc_gen::utils::GenerateError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_INPUT: &str = "ftrace\n  sched/sched_switch\ngfx\n  power/clock_set_rate\n";

const SAMPLE_OUTPUT: &str = "\
# Sets permission for vendor ftrace events
on late-init
    # ftrace trace points
    chmod 0666 /sys/kernel/debug/tracing/events/sched/sched_switch/enable
    chmod 0666 /sys/kernel/tracing/events/sched/sched_switch/enable
    # gfx trace points
    chmod 0666 /sys/kernel/debug/tracing/events/power/clock_set_rate/enable
    chmod 0666 /sys/kernel/tracing/events/power/clock_set_rate/enable
";

fn create_input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn generate_from_str(input: &str) -> String {
    let mut out = Vec::new();
    generate_rc(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_sample_categories_file() {
    let file = create_input_file(SAMPLE_INPUT);
    let mut out = Vec::new();

    let summary = generate_rc_file(file.path(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), SAMPLE_OUTPUT);
    assert_eq!(summary.categories, 2);
    assert_eq!(summary.trace_points, 2);
    assert_eq!(summary.lines_written, 8);
}

#[test]
fn test_preamble_always_first() {
    for input in ["", "gfx\n", "  sched/sched_switch\n"] {
        let output = generate_from_str(input);
        let mut lines = output.lines();

        assert_eq!(
            lines.next(),
            Some("# Sets permission for vendor ftrace events")
        );
        assert_eq!(lines.next(), Some("on late-init"));
    }
}

#[test]
fn test_line_count_formula() {
    let input = "a\n b/c\n\td/e\nf\n\n   g/h\n";
    let output = generate_from_str(input);

    // 3 headers (one empty), 3 trace points
    assert_eq!(output.lines().count(), 2 + 3 + 2 * 3);
}

#[test]
fn test_orphan_trace_point_emitted() {
    let output = generate_from_str("\tirq/irq_handler_entry\n");
    let body: Vec<&str> = output.lines().skip(2).collect();

    assert_eq!(
        body,
        vec![
            "    chmod 0666 /sys/kernel/debug/tracing/events/irq/irq_handler_entry/enable",
            "    chmod 0666 /sys/kernel/tracing/events/irq/irq_handler_entry/enable",
        ]
    );
}

#[test]
fn test_category_text_kept_verbatim() {
    let output = generate_from_str("Vendor GPU (mali)  \n");

    assert_eq!(
        output.lines().nth(2),
        Some("    # Vendor GPU (mali)   trace points")
    );
}

#[test]
fn test_crlf_input() {
    let output = generate_from_str(&SAMPLE_INPUT.replace('\n', "\r\n"));

    assert_eq!(output, SAMPLE_OUTPUT);
}

#[test]
fn test_lone_carriage_return_input() {
    let output = generate_from_str("gfx\r  sched/sched_switch\rcam\r");

    assert_eq!(
        output,
        "# Sets permission for vendor ftrace events\n\
         on late-init\n    \
         # gfx trace points\n    \
         chmod 0666 /sys/kernel/debug/tracing/events/sched/sched_switch/enable\n    \
         chmod 0666 /sys/kernel/tracing/events/sched/sched_switch/enable\n    \
         # cam trace points\n"
    );
}

#[test]
fn test_mixed_line_endings() {
    let output = generate_from_str(&SAMPLE_INPUT.replacen('\n', "\r", 2));

    assert_eq!(output, SAMPLE_OUTPUT);
}

#[test]
fn test_order_follows_input() {
    let output = generate_from_str("b\n  z/z\na\n  y/y\n");
    let body: Vec<&str> = output.lines().skip(2).collect();

    assert_eq!(
        body,
        vec![
            "    # b trace points",
            "    chmod 0666 /sys/kernel/debug/tracing/events/z/z/enable",
            "    chmod 0666 /sys/kernel/tracing/events/z/z/enable",
            "    # a trace points",
            "    chmod 0666 /sys/kernel/debug/tracing/events/y/y/enable",
            "    chmod 0666 /sys/kernel/tracing/events/y/y/enable",
        ]
    );
}

#[test]
fn test_repeated_runs_identical() {
    let file = create_input_file(SAMPLE_INPUT);
    let mut first = Vec::new();
    let mut second = Vec::new();

    generate_rc_file(file.path(), &mut first).unwrap();
    generate_rc_file(file.path(), &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_file_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("missing.txt");
    let mut out = Vec::new();

    let err = generate_rc_file(&path, &mut out).unwrap_err();

    assert!(matches!(err, GenerateError::InputUnavailable { .. }));
    assert!(err.is_input_error());
    assert!(err.to_string().contains("missing.txt"));
    assert!(out.is_empty());
}

#[test]
fn test_directory_input_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    let err = generate_rc_file(temp_dir.path(), &mut out).unwrap_err();

    assert!(matches!(err, GenerateError::InputUnavailable { .. }));
    assert!(out.is_empty());
}
