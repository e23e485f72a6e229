//! Logging macros for the process-wide logger.
//!
//! Each macro takes a format string with its arguments, optionally followed by
//! `;` and `"key" => value` attributes.
//!
//! # Examples
//!
//! ```
//! use logx::{info, warn};
//!
//! let port = 8080;
//! info!("Server listening on port {}", port);
//! warn!("Slow request"; "path" => "/users", "ms" => 1250);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($method:ident, $fmt:literal $(, $arg:expr)* $(,)? ; $($key:literal => $value:expr),+ $(,)?) => {
        $crate::logger().$method(
            ::std::format!($fmt $(, $arg)*),
            &[$($crate::Arg::from($crate::Attr::new($key, $value))),+],
        )
    };
    ($method:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::logger().$method(::std::format!($fmt $(, $arg)*), &[])
    };
}

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// use logx::{log, Severity};
/// log!(Severity::Info, "Simple message");
/// log!(Severity::Error, "Error code: {}", 500; "retry" => false);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $(, $arg:expr)* $(,)? ; $($key:literal => $value:expr),+ $(,)?) => {{
        let _ = $crate::logger().log(
            $level,
            ::std::format!($fmt $(, $arg)*),
            &[$($crate::Arg::from($crate::Attr::new($key, $value))),+],
        );
    }};
    ($level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        let _ = $crate::logger().log($level, ::std::format!($fmt $(, $arg)*), &[]);
    }};
}

/// Log a debug-level message.
///
/// ```
/// use logx::debug;
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($($t:tt)+) => {
        $crate::__emit!(debug, $($t)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($($t:tt)+) => {
        $crate::__emit!(info, $($t)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($($t:tt)+) => {
        $crate::__emit!(warn, $($t)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($($t:tt)+) => {
        $crate::__emit!(error, $($t)+)
    };
}

/// Log at Panic and unwind, unless Panic is below the minimum.
///
/// ```
/// let result = std::panic::catch_unwind(|| {
///     logx::panic_log!("Invariant broken: {}", "queue empty");
/// });
/// assert!(result.is_err());
/// ```
#[macro_export]
macro_rules! panic_log {
    ($($t:tt)+) => {
        $crate::__emit!(panic, $($t)+)
    };
}

/// Log at Fatal and exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($($t:tt)+) => {
        $crate::__emit!(fatal, $($t)+)
    };
}
