//! Handler trait: the seam between the logger and an output

use super::{attr::Attr, error::Result, record::Record, severity::Severity};
use std::sync::Arc;

pub trait Handler: Send + Sync {
    /// Whether records at `level` should be built at all.
    fn enabled(&self, level: Severity) -> bool;

    /// Render and write one record.
    fn handle(&self, record: &Record) -> Result<()>;

    /// A handler that renders `attrs` ahead of every record's own attributes.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;

    /// A handler that qualifies every key added from now on with `name.`.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;

    fn name(&self) -> &str;
}
