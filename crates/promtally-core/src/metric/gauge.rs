use std::sync::Mutex;

use crate::error::Result;
use crate::labels::LabelSet;
use crate::sample::Sample;

use super::{lock, Desc};

/// Value that can move in either direction.
#[derive(Debug)]
pub struct Gauge {
    desc: Desc,
    value: Mutex<f64>,
}

impl Gauge {
    pub fn new(name: impl Into<String>, help: impl Into<String>, labels: LabelSet) -> Result<Self> {
        Ok(Self {
            desc: Desc::new(name, help, labels)?,
            value: Mutex::new(0.0),
        })
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    pub fn set(&self, value: f64) {
        *lock(&self.value) = value;
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.inc_by(1.0);
    }

    /// Add an arbitrary (possibly negative) delta.
    pub fn inc_by(&self, amount: f64) {
        *lock(&self.value) += amount;
    }

    /// Decrement by 1.
    pub fn dec(&self) {
        self.dec_by(1.0);
    }

    pub fn dec_by(&self, amount: f64) {
        *lock(&self.value) -= amount;
    }

    pub fn value(&self) -> f64 {
        *lock(&self.value)
    }

    pub fn collect(&self) -> Vec<Sample> {
        let v = *lock(&self.value);
        vec![self.desc.sample("", v)]
    }
}
