//! Line rendering
//!
//! ```text
//! 14:02:11 [main.rs:42][WARN]: disk almost full free=1024
//! ```
//!
//! The timestamp, call site and level label are bold white; the message and its
//! attributes use the level color. Escape codes are written whenever the
//! formatter is built with colors; the handler decides that for its stream.

use super::attr::Attr;
use super::record::Record;
use super::settings::PathMode;
use colored::Color;
use std::fmt::Write;

pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Renders records into newline-terminated lines
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter {
    use_colors: bool,
}

impl LineFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Render `record`, followed by the already rendered attribute text.
    pub fn format(&self, record: &Record, mode: PathMode, attrs: &str) -> String {
        let time = record.time.format(TIME_FORMAT);
        let label = record.level.label();

        let header = match record.call_site.render(mode) {
            Some(site) => format!("{} [{}][{}]:", time, site, label),
            None => format!("{} [{}]:", time, label),
        };
        let body = format!(" {}{}", record.message, attrs);

        if self.use_colors {
            format!(
                "{}{}\n",
                paint(&header, Color::BrightWhite),
                paint(&body, record.level.color())
            )
        } else {
            format!("{}{}\n", header, body)
        }
    }
}

/// Bold foreground color
fn paint(text: &str, color: Color) -> String {
    format!("\x1b[1;{}m{}\x1b[0m", color.to_fg_str(), text)
}

/// Render attributes as ` key=value` tokens, keys qualified with `prefix`.
///
/// Values stored under the bad-key sentinel are written bare. An empty slice
/// renders as an empty string.
pub fn render_attrs(attrs: &[Attr], prefix: &str) -> String {
    let mut out = String::new();
    for attr in attrs {
        let value = escape(&attr.value.to_string());
        let _ = if attr.is_bad_key() {
            write!(out, " {}", value)
        } else {
            write!(out, " {}{}={}", prefix, attr.key, value)
        };
    }
    out
}

fn escape(value: &str) -> String {
    if value.contains(['\n', '\r', '\t']) {
        value
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    } else {
        value.to_string()
    }
}
