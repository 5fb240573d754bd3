//! promtally core: metric types, label sets, registry and text exposition.
//!
//! This crate carries no runtime or transport dependencies. Callers build
//! metrics, register them on a [`Registry`], mutate them from any thread, and
//! ask the registry for exposition text whenever a collector scrapes.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Bad input surfaces as `MetricsError` at construction/registration time,
//! and collection itself has no failure path.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod default;
pub mod error;
pub mod exposition;
pub mod labels;
pub mod metric;
pub mod registry;
pub mod sample;

pub use default::default_registry;
pub use error::{ErrorKind, MetricsError, Result};
pub use exposition::{MetricFamily, CONTENT_TYPE};
pub use labels::{Label, LabelSet};
pub use metric::{
    exponential_buckets, linear_buckets, Counter, Desc, Gauge, Histogram, Metric, MetricType,
    Summary, DEFAULT_BUCKETS,
};
pub use registry::Registry;
pub use sample::Sample;
