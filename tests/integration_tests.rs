//! Integration tests for the logger
//!
//! These tests verify:
//! - Line layout for each path mode
//! - Attribute rendering
//! - Call-site resolution through every logger entry point
//! - The severity gate
//! - Write failures and thread safety

mod common;

use common::{buffered_logger, FailingWriter, SharedBuffer};
use logx::{Arg, Attr, Logger, LoggerError, PathMode, Severity};
use std::sync::Arc;
use std::thread;

const THIS_FILE: &str = "integration_tests.rs";

#[test]
fn test_short_mode_shows_file_name_and_line() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Short);

    let line = line!() + 1;
    logger.info("Server started", &[]);

    let output = buffer.contents();
    let expected = format!(" [{}:{}][INFO]: Server started\n", THIS_FILE, line);
    assert!(output.ends_with(&expected), "{output}");
    assert!(!output.contains("tests/"));
}

#[test]
fn test_full_mode_keeps_captured_path() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Full);

    let line = line!() + 1;
    logger.warn("Disk almost full", &[]);

    let expected = format!("[{}:{}][WARN]:", file!(), line);
    assert!(buffer.contents().contains(&expected));
}

#[test]
fn test_absent_mode_drops_location_for_every_tier() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);

    logger.debug("d", &[]);
    logger.info("i", &[]);
    logger.warn("w", &[]);
    logger.error("e", &[]);
    let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| logger.panic("p", &[])));

    let lines = buffer.lines();
    assert_eq!(lines.len(), 5);
    for line in &lines {
        assert!(!line.contains(THIS_FILE), "{line}");
        assert!(!line.contains(".rs:"), "{line}");
    }
    assert!(lines[4].ends_with(" [PANIC]: p"));
}

#[test]
fn test_timestamp_prefix() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);

    logger.info("tick", &[]);

    let output = buffer.contents();
    let (time, rest) = output.split_at(8);
    let parts: Vec<&str> = time.split(':').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
    assert_eq!(rest, " [INFO]: tick\n");
}

#[test]
fn test_attributes_render_in_insertion_order() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);

    logger.info("request", &["a".into(), 1.into(), "b".into(), 2.into()]);

    assert!(buffer.contents().ends_with("]: request a=1 b=2\n"));
}

#[test]
fn test_duplicate_keys_are_kept() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);

    logger.info("dup", &[Attr::new("k", 1).into(), Attr::new("k", 2).into()]);

    assert!(buffer.contents().ends_with(" dup k=1 k=2\n"));
}

#[test]
fn test_unkeyed_value_renders_bare() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);

    logger.error("lonely", &["X".into()]);

    let output = buffer.contents();
    assert!(output.contains(" X"));
    assert!(!output.contains(" !BADKEY=X"));
    assert!(output.ends_with(" lonely X\n"));
}

#[test]
fn test_empty_attributes_leave_no_artifact() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);

    logger.info("plain", &[]);

    let output = buffer.contents();
    assert!(output.ends_with("]: plain\n"));
    assert!(!output.contains("[]"));
    assert!(!output.contains("plain \n"));
}

#[test]
fn test_message_newlines_cannot_forge_lines() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);

    logger.info("User login\n12:00:00 [ERROR]: fake", &[]);

    assert_eq!(buffer.lines().len(), 1);
    assert!(buffer.contents().contains("\\n"));
}

#[test]
fn test_log_method_and_tier_methods_resolve_same_caller() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Short);

    let first = line!() + 1;
    let _ = logger.log(Severity::Info, "direct", &[]);
    let second = line!() + 1;
    logger.info("convenience", &[]);

    let lines = buffer.lines();
    assert!(lines[0].contains(&format!("[{}:{}]", THIS_FILE, first)));
    assert!(lines[1].contains(&format!("[{}:{}]", THIS_FILE, second)));
}

#[test]
fn test_panic_tier_resolves_caller() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Short);

    let line = line!() + 1;
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| logger.panic("halt", &[])));

    assert!(result.is_err());
    assert!(buffer.contents().contains(&format!("[{}:{}][PANIC]: halt", THIS_FILE, line)));
}

#[test]
fn test_global_logger_resolves_caller() {
    static BUFFER: std::sync::OnceLock<SharedBuffer> = std::sync::OnceLock::new();
    fn build() -> Logger {
        buffered_logger(BUFFER.get_or_init(SharedBuffer::default), PathMode::Short)
    }
    static GLOBAL: logx::GlobalLogger = logx::GlobalLogger::new(build);

    let line = line!() + 1;
    GLOBAL.get().warn("from global", &[]);

    let output = BUFFER.get().map(SharedBuffer::contents).unwrap_or_default();
    assert!(output.contains(&format!("[{}:{}][WARN]: from global", THIS_FILE, line)));
}

#[test]
fn test_gate_filters_below_minimum() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);
    logger.set_level(Severity::Warn);

    logger.debug("hidden", &[]);
    logger.info("hidden", &[]);
    logger.warn("shown", &[]);
    logger.error("shown", &[]);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.ends_with("shown")));
}

#[test]
fn test_gated_panic_produces_nothing() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Absent);
    logger.set_level(Severity::Fatal);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| logger.panic("quiet", &[])));

    assert!(result.is_ok());
    assert!(buffer.contents().is_empty());
}

#[test]
fn test_path_mode_change_applies_to_next_line() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Full);

    logger.info("full", &[]);
    logger.set_path_mode(PathMode::Absent);
    logger.info("absent", &[]);

    let lines = buffer.lines();
    assert!(lines[0].contains(file!()));
    assert!(lines[1].ends_with(" [INFO]: absent"));
}

#[test]
fn test_derived_logger_carries_context() {
    let buffer = SharedBuffer::default();
    let logger = buffered_logger(&buffer, PathMode::Short);
    let request_logger = logger.with(&["service".into(), "api".into()]).with_group("req");

    let line = line!() + 1;
    request_logger.info("handled", &["id".into(), 42.into()]);

    let output = buffer.contents();
    assert!(output.contains(&format!("[{}:{}]", THIS_FILE, line)));
    assert!(output.ends_with(" handled service=api req.id=42\n"));

    // Derived loggers share settings with their parent
    logger.set_level(Severity::Error);
    assert!(!request_logger.enabled(Severity::Info));
}

#[test]
fn test_write_failure_is_surfaced_not_retried() {
    let logger = Logger::builder().writer(Box::new(FailingWriter)).build();

    let result = logger.log(Severity::Error, "lost", &[]);

    assert!(matches!(result, Err(LoggerError::Io(_))));
    assert_eq!(logger.metrics().write_failures(), 1);

    logger.info("also lost", &[]);
    assert_eq!(logger.metrics().write_failures(), 2);
}

#[test]
fn test_concurrent_lines_do_not_interleave() {
    let buffer = SharedBuffer::default();
    let logger = Arc::new(buffered_logger(&buffer, PathMode::Absent));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    let args: [Arg; 2] = ["thread".into(), (t as i64).into()];
                    logger.info(format!("message {}", i), &args);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 400);
    for line in &lines {
        assert!(line.contains(" [INFO]: message "), "{line}");
        assert!(line.contains(" thread="), "{line}");
    }
    assert_eq!(logger.metrics().lines_written(), 400);
}
