use std::sync::Mutex;

use crate::error::Result;
use crate::labels::LabelSet;
use crate::sample::Sample;

use super::{lock, Desc};

#[derive(Debug, Clone, Copy, Default)]
struct SummaryState {
    sum: f64,
    count: u64,
}

/// Running sum and count of observations. No quantiles.
#[derive(Debug)]
pub struct Summary {
    desc: Desc,
    state: Mutex<SummaryState>,
}

impl Summary {
    pub fn new(name: impl Into<String>, help: impl Into<String>, labels: LabelSet) -> Result<Self> {
        Ok(Self {
            desc: Desc::new(name, help, labels)?,
            state: Mutex::new(SummaryState::default()),
        })
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    pub fn observe(&self, value: f64) {
        let mut st = lock(&self.state);
        st.count += 1;
        st.sum += value;
    }

    pub fn sum(&self) -> f64 {
        lock(&self.state).sum
    }

    pub fn count(&self) -> u64 {
        lock(&self.state).count
    }

    pub fn collect(&self) -> Vec<Sample> {
        let st = *lock(&self.state);
        vec![
            self.desc.sample("_sum", st.sum),
            self.desc.sample("_count", st.count as f64),
        ]
    }
}
