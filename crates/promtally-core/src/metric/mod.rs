//! Metric variants and the closed `Metric` sum type the registry stores.
//!
//! Each variant owns a `Mutex` over its numeric state. Every mutator and
//! `collect()` holds that lock for the whole read-modify-write, so multi-field
//! updates (histogram sum + count + buckets) are never observed torn.

mod counter;
mod gauge;
mod histogram;
mod summary;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{MetricsError, Result};
use crate::labels::LabelSet;
use crate::sample::Sample;

pub use counter::Counter;
pub use gauge::Gauge;
pub use histogram::{exponential_buckets, linear_buckets, Histogram, DEFAULT_BUCKETS};
pub use summary::Summary;

/// Returns true when `name` matches `[A-Za-z_:][A-Za-z0-9_:]*`.
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// Exposition type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Gauge,
    Histogram,
    Summary,
}

impl MetricType {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::Counter => "counter",
            MetricType::Gauge => "gauge",
            MetricType::Histogram => "histogram",
            MetricType::Summary => "summary",
        }
    }
}

/// Immutable identity shared by every variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Desc {
    name: String,
    help: String,
    labels: Arc<LabelSet>,
}

impl Desc {
    pub fn new(name: impl Into<String>, help: impl Into<String>, labels: LabelSet) -> Result<Self> {
        let name = name.into();
        if !is_valid_metric_name(&name) {
            return Err(MetricsError::InvalidMetricName(name));
        }
        Ok(Self {
            name,
            help: help.into(),
            labels: Arc::new(labels),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn labels(&self) -> &Arc<LabelSet> {
        &self.labels
    }

    /// Sample carrying the base labels, named `<name><suffix>`.
    pub(crate) fn sample(&self, suffix: &str, value: f64) -> Sample {
        Sample::new(format!("{}{}", self.name, suffix), Arc::clone(&self.labels), value)
    }
}

/// Lock a metric's state. State is plain numbers written inside one critical
/// section, so a poisoned lock still guards consistent data.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Any registered metric. Cloning clones the handle, not the state.
#[derive(Debug, Clone)]
pub enum Metric {
    Counter(Arc<Counter>),
    Gauge(Arc<Gauge>),
    Histogram(Arc<Histogram>),
    Summary(Arc<Summary>),
}

impl Metric {
    pub fn desc(&self) -> &Desc {
        match self {
            Metric::Counter(m) => m.desc(),
            Metric::Gauge(m) => m.desc(),
            Metric::Histogram(m) => m.desc(),
            Metric::Summary(m) => m.desc(),
        }
    }

    pub fn name(&self) -> &str {
        self.desc().name()
    }

    pub fn help(&self) -> &str {
        self.desc().help()
    }

    pub fn labels(&self) -> &Arc<LabelSet> {
        self.desc().labels()
    }

    pub fn metric_type(&self) -> MetricType {
        match self {
            Metric::Counter(_) => MetricType::Counter,
            Metric::Gauge(_) => MetricType::Gauge,
            Metric::Histogram(_) => MetricType::Histogram,
            Metric::Summary(_) => MetricType::Summary,
        }
    }

    /// Current samples in exposition order for this metric type.
    pub fn collect(&self) -> Vec<Sample> {
        match self {
            Metric::Counter(m) => m.collect(),
            Metric::Gauge(m) => m.collect(),
            Metric::Histogram(m) => m.collect(),
            Metric::Summary(m) => m.collect(),
        }
    }

    pub fn as_counter(&self) -> Option<&Arc<Counter>> {
        match self {
            Metric::Counter(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_gauge(&self) -> Option<&Arc<Gauge>> {
        match self {
            Metric::Gauge(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_histogram(&self) -> Option<&Arc<Histogram>> {
        match self {
            Metric::Histogram(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_summary(&self) -> Option<&Arc<Summary>> {
        match self {
            Metric::Summary(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Arc<Counter>> for Metric {
    fn from(m: Arc<Counter>) -> Self {
        Metric::Counter(m)
    }
}

impl From<Arc<Gauge>> for Metric {
    fn from(m: Arc<Gauge>) -> Self {
        Metric::Gauge(m)
    }
}

impl From<Arc<Histogram>> for Metric {
    fn from(m: Arc<Histogram>) -> Self {
        Metric::Histogram(m)
    }
}

impl From<Arc<Summary>> for Metric {
    fn from(m: Arc<Summary>) -> Self {
        Metric::Summary(m)
    }
}

impl From<Counter> for Metric {
    fn from(m: Counter) -> Self {
        Metric::Counter(Arc::new(m))
    }
}

impl From<Gauge> for Metric {
    fn from(m: Gauge) -> Self {
        Metric::Gauge(Arc::new(m))
    }
}

impl From<Histogram> for Metric {
    fn from(m: Histogram) -> Self {
        Metric::Histogram(Arc::new(m))
    }
}

impl From<Summary> for Metric {
    fn from(m: Summary) -> Self {
        Metric::Summary(Arc::new(m))
    }
}
