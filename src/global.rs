//! Process-wide logger and the free-function façade
//!
//! The default logger is built on first use, exactly once, no matter how many
//! threads race for it, and lives until the process ends. Configure it with
//! [`set_level`] and [`set_path_mode`] at startup, before other threads log.

use crate::core::{Arg, Logger, PathMode, Severity};
use std::sync::OnceLock;

/// A lazily constructed, never destroyed logger
///
/// # Example
///
/// ```
/// use logx::{GlobalLogger, Logger};
///
/// fn build() -> Logger {
///     Logger::builder().colors(false).build()
/// }
///
/// static APP_LOGGER: GlobalLogger = GlobalLogger::new(build);
///
/// APP_LOGGER.get().info("hello", &[]);
/// assert!(APP_LOGGER.is_initialized());
/// ```
pub struct GlobalLogger {
    cell: OnceLock<Logger>,
    init: fn() -> Logger,
}

impl GlobalLogger {
    pub const fn new(init: fn() -> Logger) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// The logger, constructing it on the first call.
    #[inline]
    pub fn get(&self) -> &Logger {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

pub(crate) static DEFAULT: GlobalLogger = GlobalLogger::new(Logger::new);

/// The process-wide stderr logger.
#[inline]
pub fn logger() -> &'static Logger {
    DEFAULT.get()
}

#[track_caller]
pub fn debug(message: impl Into<String>, args: &[Arg]) {
    logger().debug(message, args);
}

#[track_caller]
pub fn info(message: impl Into<String>, args: &[Arg]) {
    logger().info(message, args);
}

#[track_caller]
pub fn warn(message: impl Into<String>, args: &[Arg]) {
    logger().warn(message, args);
}

#[track_caller]
pub fn error(message: impl Into<String>, args: &[Arg]) {
    logger().error(message, args);
}

/// Log at Panic and unwind; does nothing when Panic is below the minimum.
#[track_caller]
pub fn panic_log(message: impl Into<String>, args: &[Arg]) {
    logger().panic(message, args);
}

/// Log at Fatal and exit with status 1.
#[track_caller]
pub fn fatal(message: impl Into<String>, args: &[Arg]) -> ! {
    logger().fatal(message, args)
}

/// Set the minimum severity of the process-wide logger. Default: Debug.
pub fn set_level(level: Severity) {
    logger().set_level(level);
}

pub fn level() -> Severity {
    logger().level()
}

/// Set how the call site is displayed. Default: [`PathMode::Short`].
pub fn set_path_mode(mode: PathMode) {
    logger().set_path_mode(mode);
}

pub fn path_mode() -> PathMode {
    logger().path_mode()
}
