use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{MetricsError, Result};
use crate::exposition::{self, MetricFamily};
use crate::metric::Metric;

/// Authoritative set of live metrics, keyed by name.
///
/// Membership lives behind its own lock, separate from every metric's state
/// lock. `gather`/`collect` clone the member handles under the membership
/// lock and release it before any metric is read, so the two locks are never
/// held together.
#[derive(Debug, Default)]
pub struct Registry {
    // Insertion order is the exposition order.
    metrics: RwLock<Vec<Metric>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Metric>> {
        self.metrics.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Metric>> {
        self.metrics.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a metric. Fails if the name is already taken; the registry is
    /// left unchanged in that case.
    pub fn register(&self, metric: impl Into<Metric>) -> Result<()> {
        let metric = metric.into();
        let mut metrics = self.write();
        if metrics.iter().any(|m| m.name() == metric.name()) {
            return Err(MetricsError::DuplicateMetric(metric.name().to_string()));
        }
        tracing::debug!(
            name = %metric.name(),
            kind = metric.metric_type().as_str(),
            "metric registered"
        );
        metrics.push(metric);
        Ok(())
    }

    /// Remove a metric by name. Absent names are a no-op.
    pub fn unregister(&self, name: &str) -> Option<Metric> {
        let mut metrics = self.write();
        let idx = metrics.iter().position(|m| m.name() == name)?;
        tracing::debug!(%name, "metric unregistered");
        Some(metrics.remove(idx))
    }

    pub fn clear(&self) {
        let mut metrics = self.write();
        tracing::debug!(count = metrics.len(), "registry cleared");
        metrics.clear();
    }

    pub fn get(&self, name: &str) -> Option<Metric> {
        self.read().iter().find(|m| m.name() == name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().iter().any(|m| m.name() == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.read().iter().map(|m| m.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Structured snapshot of every registered metric.
    pub fn gather(&self) -> Vec<MetricFamily> {
        let snapshot: Vec<Metric> = self.read().clone();
        tracing::trace!(count = snapshot.len(), "gathering metrics");
        snapshot
            .iter()
            .map(|m| MetricFamily {
                name: m.name().to_string(),
                help: m.help().to_string(),
                metric_type: m.metric_type(),
                samples: m.collect(),
            })
            .collect()
    }

    /// Render every registered metric as exposition text.
    pub fn collect(&self) -> String {
        exposition::render(&self.gather())
    }
}
