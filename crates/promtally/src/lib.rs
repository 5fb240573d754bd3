//! Top-level facade crate for promtally.
//!
//! Re-exports the core types and the exporter library so users can depend on
//! a single crate, and offers convenience functions bound to the process-wide
//! default registry. Independent `Registry` values expose the same operations
//! directly and never touch the default.

use std::sync::Arc;

pub mod core {
    pub use promtally_core::*;
}

pub mod exporter {
    pub use promtally_exporter::*;
}

pub use promtally_core::{
    default_registry, Counter, Gauge, Histogram, LabelSet, Metric, MetricsError, Registry, Result,
    Summary,
};

/// Build a counter and register it on the default registry.
pub fn create_counter(name: &str, help: &str, labels: Option<LabelSet>) -> Result<Arc<Counter>> {
    let m = Arc::new(Counter::new(name, help, labels.unwrap_or_default())?);
    default_registry().register(Arc::clone(&m))?;
    Ok(m)
}

/// Build a gauge and register it on the default registry.
pub fn create_gauge(name: &str, help: &str, labels: Option<LabelSet>) -> Result<Arc<Gauge>> {
    let m = Arc::new(Gauge::new(name, help, labels.unwrap_or_default())?);
    default_registry().register(Arc::clone(&m))?;
    Ok(m)
}

/// Build a histogram over `bounds` and register it on the default registry.
pub fn create_histogram(
    name: &str,
    help: &str,
    bounds: &[f64],
    labels: Option<LabelSet>,
) -> Result<Arc<Histogram>> {
    let m = Arc::new(Histogram::new(name, help, bounds, labels.unwrap_or_default())?);
    default_registry().register(Arc::clone(&m))?;
    Ok(m)
}

/// Build a summary and register it on the default registry.
pub fn create_summary(name: &str, help: &str, labels: Option<LabelSet>) -> Result<Arc<Summary>> {
    let m = Arc::new(Summary::new(name, help, labels.unwrap_or_default())?);
    default_registry().register(Arc::clone(&m))?;
    Ok(m)
}

pub fn register_metric(metric: impl Into<Metric>) -> Result<()> {
    default_registry().register(metric)
}

/// Idempotent; returns the removed metric if there was one.
pub fn unregister_metric(name: &str) -> Option<Metric> {
    default_registry().unregister(name)
}

pub fn clear_registry() {
    default_registry().clear();
}

/// Exposition text for everything on the default registry.
pub fn collect_all() -> String {
    default_registry().collect()
}
