//! # logx
//!
//! A process-wide console logger with colored single-line output, automatic
//! call-site resolution, and two escalation tiers above `Error`.
//!
//! ## Features
//!
//! - **Six tiers**: Debug, Info, Warn, Error, plus Panic (log, then unwind) and
//!   Fatal (log, then exit with status 1)
//! - **Call sites**: every line shows the file and line of the code that logged,
//!   in full, shortened to the file name, or not at all
//! - **Attributes**: ` key=value` pairs after the message
//! - **`log` facade**: optional bridge so `log::info!` lands in the same output
//!
//! ```text
//! 14:02:11 [main.rs:42][WARN]: disk almost full free=1024
//! ```
//!
//! ## Example
//!
//! ```
//! use logx::{PathMode, Severity};
//!
//! logx::set_level(Severity::Info);
//! logx::set_path_mode(PathMode::Short);
//!
//! logx::debug("hidden", &[]);
//! logx::info("user logged in", &["user".into(), "alice".into(), "attempt".into(), 3.into()]);
//! ```

#[cfg(feature = "log-bridge")]
pub mod bridge;
pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Arg, Attr, CallSite, Handler, Logger, LoggerBuilder, LoggerError, PathMode, Record,
        Result, Severity, Value,
    };
    pub use crate::global::GlobalLogger;
    pub use crate::handlers::ConsoleHandler;
}

#[cfg(feature = "log-bridge")]
pub use crate::bridge::{init_log_bridge, LogBridge};
pub use crate::core::{
    Arg, Attr, CallSite, Handler, LineFormatter, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, PathMode, Record, Result, Settings, Severity, Value, BAD_KEY,
};
pub use crate::global::{
    debug, error, fatal, info, level, logger, panic_log, path_mode, set_level, set_path_mode,
    warn, GlobalLogger,
};
pub use crate::handlers::ConsoleHandler;
