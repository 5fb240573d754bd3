use std::sync::Mutex;

use crate::error::{MetricsError, Result};
use crate::labels::LabelSet;
use crate::sample::Sample;

use super::{lock, Desc};

/// Monotonically non-decreasing value.
#[derive(Debug)]
pub struct Counter {
    desc: Desc,
    value: Mutex<f64>,
}

impl Counter {
    pub fn new(name: impl Into<String>, help: impl Into<String>, labels: LabelSet) -> Result<Self> {
        Ok(Self {
            desc: Desc::new(name, help, labels)?,
            value: Mutex::new(0.0),
        })
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    /// Increment by 1.
    pub fn inc(&self) {
        *lock(&self.value) += 1.0;
    }

    /// Increment by `amount`. Negative (or NaN) amounts are rejected and the
    /// value stays as it was.
    pub fn inc_by(&self, amount: f64) -> Result<()> {
        if amount.is_nan() || amount < 0.0 {
            return Err(MetricsError::NegativeIncrement {
                name: self.desc.name().to_string(),
                amount,
            });
        }
        *lock(&self.value) += amount;
        Ok(())
    }

    pub fn value(&self) -> f64 {
        *lock(&self.value)
    }

    pub fn collect(&self) -> Vec<Sample> {
        let v = *lock(&self.value);
        vec![self.desc.sample("", v)]
    }
}
