//! Helpers shared by the integration tests
#![allow(dead_code)]

use logx::{Logger, PathMode, Severity};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory writer that can be cloned into a logger and read back afterwards
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

/// Writer whose every write fails
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Colorless logger writing into `buffer`
pub fn buffered_logger(buffer: &SharedBuffer, mode: PathMode) -> Logger {
    Logger::builder()
        .min_level(Severity::Debug)
        .path_mode(mode)
        .colors(false)
        .writer(Box::new(buffer.clone()))
        .build()
}
