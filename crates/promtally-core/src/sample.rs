//! One collected data point.

use std::sync::Arc;

use crate::labels::LabelSet;

/// A `(name, labels, value, timestamp)` point produced by `collect()`.
///
/// Samples are built fresh on every collection and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub labels: Arc<LabelSet>,
    pub value: f64,
    /// Milliseconds since the Unix epoch. Metrics in this crate never set it.
    pub timestamp: Option<i64>,
}

impl Sample {
    pub fn new(name: impl Into<String>, labels: Arc<LabelSet>, value: f64) -> Self {
        Self {
            name: name.into(),
            labels,
            value,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, millis: i64) -> Self {
        self.timestamp = Some(millis);
        self
    }
}
