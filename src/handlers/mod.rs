//! Handler implementations

pub mod console;

pub use console::{stderr_colors, ConsoleHandler, SharedWriter};

pub use crate::core::Handler;
