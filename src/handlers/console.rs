//! Console handler implementation

use crate::core::{
    format::render_attrs, Attr, Handler, LineFormatter, Record, Result, Settings, Severity,
};
use parking_lot::Mutex;
use std::env;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// Output shared by a handler and everything derived from it
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writes colored single-line records to stderr, or to any writer
///
/// Every line goes out in one `write_all` under the writer lock, so lines from
/// concurrent callers never interleave.
#[derive(Clone)]
pub struct ConsoleHandler {
    settings: Arc<Settings>,
    writer: SharedWriter,
    formatter: LineFormatter,
    /// Key qualifier accumulated through `with_group`
    prefix: String,
    /// Attributes from `with_attrs`, already rendered
    context: String,
}

impl ConsoleHandler {
    /// Handler on stderr, colored when [`stderr_colors`] says so
    pub fn new(settings: Arc<Settings>) -> Self {
        Self::with_writer(settings, Box::new(io::stderr())).with_colors(stderr_colors())
    }

    /// Handler on an arbitrary writer, uncolored until [`with_colors`](Self::with_colors)
    pub fn with_writer(settings: Arc<Settings>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            settings,
            writer: Arc::new(Mutex::new(writer)),
            formatter: LineFormatter::new(false),
            prefix: String::new(),
            context: String::new(),
        }
    }

    /// Enable or disable ANSI colors
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.formatter = LineFormatter::new(use_colors);
        self
    }

    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }
}

/// Whether lines written to stderr should carry ANSI colors.
///
/// `CLICOLOR_FORCE` (anything but `0`) forces them on, a non-empty `NO_COLOR`
/// turns them off, otherwise they follow whether stderr is a terminal.
pub fn stderr_colors() -> bool {
    color_choice(
        io::stderr().is_terminal(),
        env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        env::var_os("CLICOLOR_FORCE").is_some_and(|v| v != "0"),
    )
}

fn color_choice(is_terminal: bool, no_color: bool, force: bool) -> bool {
    force || (is_terminal && !no_color)
}

impl Handler for ConsoleHandler {
    fn enabled(&self, level: Severity) -> bool {
        self.settings.enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let mut attrs = self.context.clone();
        attrs.push_str(&render_attrs(&record.attrs, &self.prefix));

        let line = self
            .formatter
            .format(record, self.settings.path_mode(), &attrs);

        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut handler = self.clone();
        handler.context.push_str(&render_attrs(&attrs, &self.prefix));
        Arc::new(handler)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut handler = self.clone();
        if !name.is_empty() {
            handler.prefix.push_str(name);
            handler.prefix.push('.');
        }
        Arc::new(handler)
    }

    fn name(&self) -> &str {
        "console"
    }
}
