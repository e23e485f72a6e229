//! Core logger types and traits

pub mod attr;
pub mod caller;
pub mod error;
pub mod format;
pub mod handler;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod settings;
pub mod severity;
pub mod termination;

pub use attr::{Arg, Attr, Value, BAD_KEY};
pub use caller::CallSite;
pub use error::{LoggerError, Result};
pub use format::LineFormatter;
pub use handler::Handler;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use settings::{PathMode, Settings};
pub use severity::Severity;
