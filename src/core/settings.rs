//! Runtime switches shared between a logger and its handler

use super::error::LoggerError;
use super::severity::Severity;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the call site is shown in the output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum PathMode {
    /// No `[file:line]` segment at all
    Absent,
    /// The path exactly as captured
    Full,
    /// Only the final path component
    #[default]
    Short,
}

impl PathMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            PathMode::Absent => "absent",
            PathMode::Full => "full",
            PathMode::Short => "short",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for PathMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "absent" | "none" => Ok(PathMode::Absent),
            "full" => Ok(PathMode::Full),
            "short" => Ok(PathMode::Short),
            _ => Err(LoggerError::invalid_path_mode(s)),
        }
    }
}

/// Minimum severity and path mode.
///
/// Meant to be set once at startup. Writes are visible to every thread but
/// nothing orders them against records already in flight.
#[derive(Debug, Default)]
pub struct Settings {
    min_level: RwLock<Severity>,
    path_mode: RwLock<PathMode>,
}

impl Settings {
    pub fn new(min_level: Severity, path_mode: PathMode) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            path_mode: RwLock::new(path_mode),
        }
    }

    /// The gate: true iff `level` is at or above the configured minimum.
    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        level >= *self.min_level.read()
    }

    pub fn min_level(&self) -> Severity {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: Severity) {
        *self.min_level.write() = level;
    }

    pub fn path_mode(&self) -> PathMode {
        *self.path_mode.read()
    }

    pub fn set_path_mode(&self, mode: PathMode) {
        *self.path_mode.write() = mode;
    }
}
