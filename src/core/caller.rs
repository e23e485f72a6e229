//! Call-site resolution
//!
//! Every function between a public entry point and [`CallSite::caller`] is
//! `#[track_caller]`, so the captured location is the first frame outside the
//! logger. No runtime stack walk happens and no frame is ever skipped by name.
//!
//! Untracked hops per entry point:
//!
//! | entry point                                   | untracked hops |
//! |-----------------------------------------------|----------------|
//! | `logx::debug` .. `logx::fatal`                | 0              |
//! | `debug!` .. `fatal!`, `log!` macros           | 0              |
//! | `Logger::log` and the tier methods            | 0              |
//! | `log` crate macros through the bridge         | n/a, the `log` record carries file and line |
//!
//! A new entry point must keep that count at zero: mark it `#[track_caller]`.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;

use super::settings::PathMode;

/// File and line of the code that issued a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallSite {
    Known { file: Cow<'static, str>, line: u32 },
    Unknown,
}

impl CallSite {
    /// Location of the nearest caller that is not `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Build from optional parts, as handed over by foreign records.
    pub fn from_parts(file: Option<&str>, line: Option<u32>) -> Self {
        match (file, line) {
            (Some(file), Some(line)) if !file.is_empty() => CallSite::Known {
                file: Cow::Owned(file.to_string()),
                line,
            },
            _ => CallSite::Unknown,
        }
    }

    pub fn file(&self) -> &str {
        match self {
            CallSite::Known { file, .. } => file,
            CallSite::Unknown => "unknown",
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            CallSite::Known { line, .. } => *line,
            CallSite::Unknown => 0,
        }
    }

    /// `file:line` as shown for the given mode, `None` when the mode hides it.
    pub fn render(&self, mode: PathMode) -> Option<String> {
        match mode {
            PathMode::Absent => None,
            PathMode::Full => Some(self.to_string()),
            PathMode::Short => Some(format!("{}:{}", self.short_file(), self.line())),
        }
    }

    fn short_file(&self) -> &str {
        match self {
            CallSite::Known { file, .. } => {
                let file: &str = file;
                Path::new(file)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(file)
            }
            CallSite::Unknown => self.file(),
        }
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        CallSite::Known {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file(), self.line())
    }
}
