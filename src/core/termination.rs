//! Side effects of the two escalation tiers
//!
//! Both run after the write attempt, whatever its outcome.

/// Exit status used by the Fatal tier.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Abort the current operation by unwinding. An enclosing `catch_unwind` can
/// stop it; the payload is the logged message.
#[track_caller]
pub fn unwind(message: &str) -> ! {
    panic!("{}", message)
}

/// End the process at once. No unwinding, no destructors.
pub fn exit() -> ! {
    std::process::exit(FATAL_EXIT_CODE)
}
