//! Logger: builds records and routes them to a handler

use super::{
    attr::{collect_attrs, Arg},
    caller::CallSite,
    error::Result,
    handler::Handler,
    metrics::LoggerMetrics,
    record::Record,
    settings::{PathMode, Settings},
    severity::Severity,
    termination,
};
use crate::handlers::ConsoleHandler;
use std::io::Write;
use std::sync::Arc;

pub struct Logger {
    handler: Arc<dyn Handler>,
    settings: Arc<Settings>,
    /// Shared with loggers derived through `with`/`with_group`
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Console logger writing to stderr with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logger over a custom handler. `settings` must be the object the handler
    /// consults, so that `set_level` and `set_path_mode` reach it.
    pub fn with_handler(settings: Arc<Settings>, handler: Arc<dyn Handler>) -> Self {
        Self {
            handler,
            settings,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn set_level(&self, level: Severity) {
        self.settings.set_min_level(level);
    }

    pub fn level(&self) -> Severity {
        self.settings.min_level()
    }

    pub fn set_path_mode(&self, mode: PathMode) {
        self.settings.set_path_mode(mode);
    }

    pub fn path_mode(&self) -> PathMode {
        self.settings.path_mode()
    }

    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        self.handler.enabled(level)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Emit one record at `level`.
    ///
    /// A disabled level returns before the call site, the timestamp or the line
    /// are computed. A write error is counted and returned, never retried.
    #[track_caller]
    pub fn log(&self, level: Severity, message: impl Into<String>, args: &[Arg]) -> Result<()> {
        if !self.handler.enabled(level) {
            return Ok(());
        }

        let record = Record::new(level, message, CallSite::caller()).with_args(args);
        self.dispatch(&record)
    }

    /// Hand an already built record to the handler, skipping the gate.
    pub fn dispatch(&self, record: &Record) -> Result<()> {
        match self.handler.handle(record) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_write_failure();
                Err(e)
            }
        }
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl Into<String>, args: &[Arg]) {
        let _ = self.log(Severity::Debug, message, args);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl Into<String>, args: &[Arg]) {
        let _ = self.log(Severity::Info, message, args);
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl Into<String>, args: &[Arg]) {
        let _ = self.log(Severity::Warn, message, args);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl Into<String>, args: &[Arg]) {
        let _ = self.log(Severity::Error, message, args);
    }

    /// Log at Panic, then unwind the calling thread.
    ///
    /// When Panic is below the configured minimum this does nothing at all and
    /// returns normally.
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>, args: &[Arg]) {
        if !self.enabled(Severity::Panic) {
            return;
        }
        let message = message.into();
        let _ = self.log(Severity::Panic, message.as_str(), args);
        termination::unwind(&message)
    }

    /// Log at Fatal, then exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>, args: &[Arg]) -> ! {
        let _ = self.log(Severity::Fatal, message, args);
        termination::exit()
    }

    /// Derived logger whose lines carry `args` ahead of each record's own.
    #[must_use]
    pub fn with(&self, args: &[Arg]) -> Logger {
        self.derive(self.handler.with_attrs(collect_attrs(args)))
    }

    /// Derived logger that qualifies later keys with `name.`.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Logger {
        self.derive(self.handler.with_group(name))
    }

    fn derive(&self, handler: Arc<dyn Handler>) -> Logger {
        Self {
            handler,
            settings: Arc::clone(&self.settings),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a console [`Logger`]
///
/// # Example
///
/// ```
/// use logx::{Logger, PathMode, Severity};
///
/// let logger = Logger::builder()
///     .min_level(Severity::Info)
///     .path_mode(PathMode::Full)
///     .colors(false)
///     .build();
///
/// assert!(!logger.enabled(Severity::Debug));
/// ```
pub struct LoggerBuilder {
    min_level: Severity,
    path_mode: PathMode,
    use_colors: Option<bool>,
    writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: Severity::Debug,
            path_mode: PathMode::Short,
            use_colors: None,
            writer: None,
        }
    }

    #[must_use]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = mode;
        self
    }

    /// Force colors on or off. Left unset, stderr is colored when it is a
    /// terminal and a custom writer is not.
    #[must_use]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = Some(use_colors);
        self
    }

    /// Write lines to `writer` instead of stderr
    #[must_use]
    pub fn writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.writer = Some(writer);
        self
    }

    pub fn build(self) -> Logger {
        let settings = Arc::new(Settings::new(self.min_level, self.path_mode));
        let mut handler = match self.writer {
            Some(writer) => ConsoleHandler::with_writer(Arc::clone(&settings), writer),
            None => ConsoleHandler::new(Arc::clone(&settings)),
        };
        if let Some(use_colors) = self.use_colors {
            handler = handler.with_colors(use_colors);
        }

        Logger::with_handler(settings, Arc::new(handler))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
