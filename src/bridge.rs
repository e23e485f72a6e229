//! Bridge from the `log` crate facade
//!
//! Once installed, `log::info!` and friends anywhere in the process end up in a
//! [`GlobalLogger`], with the file and line the `log` macros recorded and their
//! key/values as attributes. `log` has no tier below Debug, so Trace maps to Debug.

use crate::core::{Attr, CallSite, LoggerError, Record, Result, Severity, Value};
use crate::global::{GlobalLogger, DEFAULT};
use log::kv;
use log::{LevelFilter, Log, Metadata};

pub struct LogBridge {
    global: &'static GlobalLogger,
}

impl LogBridge {
    pub const fn new(global: &'static GlobalLogger) -> Self {
        Self { global }
    }

    /// Register as the process-wide `log` logger. Fails if one is already set.
    pub fn install(&'static self) -> Result<()> {
        log::set_logger(self).map_err(|e| LoggerError::bridge_install(e.to_string()))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

static DEFAULT_BRIDGE: LogBridge = LogBridge::new(&DEFAULT);

/// Route the `log` facade into the process-wide logger.
pub fn init_log_bridge() -> Result<()> {
    DEFAULT_BRIDGE.install()
}

pub fn severity_of(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warn,
        log::Level::Info => Severity::Info,
        log::Level::Debug | log::Level::Trace => Severity::Debug,
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.global.get().enabled(severity_of(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let logger = self.global.get();
        let level = severity_of(record.level());
        if !logger.enabled(level) {
            return;
        }

        let mut collector = AttrCollector::default();
        let _ = record.key_values().visit(&mut collector);

        let call_site = CallSite::from_parts(record.file(), record.line());
        let entry = Record::new(level, record.args().to_string(), call_site).with_attrs(collector.attrs);
        let _ = logger.dispatch(&entry);
    }

    fn flush(&self) {}
}

#[derive(Default)]
struct AttrCollector {
    attrs: Vec<Attr>,
}

impl<'kvs> kv::VisitSource<'kvs> for AttrCollector {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> std::result::Result<(), kv::Error> {
        self.attrs.push(Attr::new(key.as_str(), convert(&value)));
        Ok(())
    }
}

fn convert(value: &kv::Value<'_>) -> Value {
    if let Some(i) = value.to_i64() {
        Value::Int(i)
    } else if let Some(u) = value.to_u64() {
        Value::Uint(u)
    } else if let Some(b) = value.to_bool() {
        Value::Bool(b)
    } else {
        Value::display(value)
    }
}
