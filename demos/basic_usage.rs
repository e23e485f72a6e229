//! Basic logger usage example
//!
//! Demonstrates the process-wide logger, path modes, attributes and the Panic
//! tier. Output goes to stderr.
//!
//! Run with: cargo run --example basic_usage

use logx::{PathMode, Severity};

fn main() -> logx::Result<()> {
    println!("=== logx - Basic Usage Example ===\n");

    println!("1. Logging at different levels:");
    logx::debug("This is a debug message", &[]);
    logx::info("This is an info message", &[]);
    logx::warn("This is a warning message", &[]);
    logx::error("This is an error message", &[]);

    println!("\n2. Attributes:");
    logx::info("User logged in", &["user".into(), "alice".into(), "attempt".into(), 3.into()]);
    logx::warn!("Slow request took {}ms", 1250; "path" => "/users");

    println!("\n3. Path modes:");
    logx::set_path_mode(PathMode::Full);
    logx::info("Full path", &[]);
    logx::set_path_mode(PathMode::Absent);
    logx::info("No path", &[]);
    logx::set_path_mode(PathMode::Short);

    println!("\n4. Minimum level set to WARN - debug and info won't show:");
    logx::set_level(Severity::Warn);
    logx::debug("Debug message (hidden)", &[]);
    logx::info("Info message (hidden)", &[]);
    logx::warn("Warning message (visible)", &[]);

    println!("\n5. The log facade:");
    logx::init_log_bridge()?;
    log::warn!(queue = "jobs"; "Backlog growing");

    println!("\n6. Panic tier, caught:");
    let caught = std::panic::catch_unwind(|| logx::panic_log("Invariant broken", &[]));
    println!("   unwound: {}", caught.is_err());

    println!("\n=== Example completed successfully! ===");
    logx::fatal("Fatal ends the process with status 1", &[])
}
