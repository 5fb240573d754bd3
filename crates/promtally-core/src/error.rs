//! Shared error type across promtally crates.

use thiserror::Error;

/// Error categories (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed name, empty label value, bad bucket layout.
    Validation,
    /// Operation would break a metric's invariant (negative counter step).
    Domain,
    /// Name already taken in the target registry.
    Duplicate,
    /// Exporter configuration rejected.
    Config,
    /// I/O failure outside the core (config file read).
    Io,
}

impl ErrorKind {
    /// String representation used in logs and test assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Domain => "DOMAIN",
            ErrorKind::Duplicate => "DUPLICATE",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    #[error("invalid metric name: {0:?}")]
    InvalidMetricName(String),
    #[error("invalid label name: {0:?}")]
    InvalidLabelName(String),
    #[error("empty value for label {0:?}")]
    EmptyLabelValue(String),
    #[error("label {0:?} is reserved for this metric type")]
    ReservedLabel(String),
    #[error("invalid buckets: {0}")]
    InvalidBuckets(String),
    #[error("counter {name:?} cannot be incremented by {amount}")]
    NegativeIncrement { name: String, amount: f64 },
    #[error("metric {0:?} is already registered")]
    DuplicateMetric(String),
    #[error("config: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(String),
}

impl MetricsError {
    /// Map an error to its stable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::InvalidMetricName(_)
            | MetricsError::InvalidLabelName(_)
            | MetricsError::EmptyLabelValue(_)
            | MetricsError::ReservedLabel(_)
            | MetricsError::InvalidBuckets(_) => ErrorKind::Validation,
            MetricsError::NegativeIncrement { .. } => ErrorKind::Domain,
            MetricsError::DuplicateMetric(_) => ErrorKind::Duplicate,
            MetricsError::Config(_) => ErrorKind::Config,
            MetricsError::Io(_) => ErrorKind::Io,
        }
    }
}
