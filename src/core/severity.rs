//! Severity tiers
//!
//! The four standard tiers are joined by two escalation tiers, [`Severity::Panic`]
//! and [`Severity::Fatal`], which sit above `Error` and end the current operation
//! or the whole process after the record is written. Both values are reserved:
//! there is no way to register additional tiers, and adding one means extending
//! [`Severity::label`] and [`Severity::color`] together.

use super::error::LoggerError;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i8)]
pub enum Severity {
    #[default]
    Debug = -4,
    Info = 0,
    Warn = 4,
    Error = 8,
    /// Reserved. Logs, then unwinds the calling thread.
    Panic = 12,
    /// Reserved. Logs, then exits the process.
    Fatal = 16,
}

impl Severity {
    /// Every tier, lowest first.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Panic,
        Severity::Fatal,
    ];

    /// Label rendered inside the `[...]` level segment.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Panic => "PANIC",
            Severity::Fatal => "FATAL",
            standard => standard.standard_label(),
        }
    }

    fn standard_label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            _ => "ERROR",
        }
    }

    /// Color of the message body. Everything stricter than `Warn` uses the alert color.
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => Color::BrightWhite,
            Severity::Debug => Color::Blue,
            Severity::Warn => Color::Yellow,
            _ => Color::Red,
        }
    }

    /// Numeric tier value.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    pub fn is_terminating(&self) -> bool {
        matches!(self, Severity::Panic | Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "PANIC" => Ok(Severity::Panic),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
