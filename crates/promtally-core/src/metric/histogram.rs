use std::sync::{Arc, Mutex};

use crate::error::{MetricsError, Result};
use crate::exposition::format_bound;
use crate::labels::LabelSet;
use crate::sample::Sample;

use super::{lock, Desc};

/// Conventional latency buckets, in seconds.
pub const DEFAULT_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// `count` bounds starting at `start`, each `width` apart.
pub fn linear_buckets(start: f64, width: f64, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(MetricsError::InvalidBuckets("count must be at least 1".into()));
    }
    if !(width > 0.0) {
        return Err(MetricsError::InvalidBuckets("width must be positive".into()));
    }
    let bounds: Vec<f64> = (0..count).map(|i| start + width * i as f64).collect();
    normalize_bounds(bounds)
}

/// `count` bounds starting at `start`, each `factor` times the previous.
pub fn exponential_buckets(start: f64, factor: f64, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(MetricsError::InvalidBuckets("count must be at least 1".into()));
    }
    if !(factor > 1.0) {
        return Err(MetricsError::InvalidBuckets("factor must be greater than 1".into()));
    }
    let mut bounds = Vec::with_capacity(count);
    let mut next = start;
    for _ in 0..count {
        bounds.push(next);
        next *= factor;
    }
    normalize_bounds(bounds)
}

/// Sort ascending; reject non-finite, non-positive and repeated bounds.
fn normalize_bounds(mut bounds: Vec<f64>) -> Result<Vec<f64>> {
    if let Some(b) = bounds.iter().find(|b| !b.is_finite() || **b <= 0.0) {
        return Err(MetricsError::InvalidBuckets(format!(
            "bound {b} must be positive and finite"
        )));
    }
    bounds.sort_by(f64::total_cmp);
    if let Some(w) = bounds.windows(2).find(|w| w[0] == w[1]) {
        return Err(MetricsError::InvalidBuckets(format!("duplicate bound {}", w[0])));
    }
    Ok(bounds)
}

struct Bucket {
    upper: f64,
    /// Base labels plus `le`, built once since the layout never changes.
    labels: Arc<LabelSet>,
}

#[derive(Debug, Clone, Default)]
struct HistogramState {
    sum: f64,
    count: u64,
    /// Cumulative count per bucket, same order as `Histogram::buckets`.
    buckets: Vec<u64>,
}

/// Cumulative histogram with a fixed bucket layout.
pub struct Histogram {
    desc: Desc,
    buckets: Vec<Bucket>,
    inf_labels: Arc<LabelSet>,
    state: Mutex<HistogramState>,
}

impl Histogram {
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        bounds: &[f64],
        labels: LabelSet,
    ) -> Result<Self> {
        if labels.contains("le") {
            return Err(MetricsError::ReservedLabel("le".into()));
        }
        let desc = Desc::new(name, help, labels)?;
        let bounds = normalize_bounds(bounds.to_vec())?;

        let with_le = |le: &str| -> Result<Arc<LabelSet>> {
            let le = LabelSet::from_pairs([("le", le)])?;
            Ok(Arc::new(desc.labels().merge(&le)))
        };

        let buckets = bounds
            .iter()
            .map(|&upper| -> Result<Bucket> {
                Ok(Bucket {
                    upper,
                    labels: with_le(&format_bound(upper))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let inf_labels = with_le("+Inf")?;

        let state = HistogramState {
            buckets: vec![0; buckets.len()],
            ..HistogramState::default()
        };

        Ok(Self {
            desc,
            buckets,
            inf_labels,
            state: Mutex::new(state),
        })
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    /// Configured upper bounds, ascending.
    pub fn bounds(&self) -> Vec<f64> {
        self.buckets.iter().map(|b| b.upper).collect()
    }

    /// Record one value. Every bucket with `upper >= value` is incremented.
    pub fn observe(&self, value: f64) {
        let mut st = lock(&self.state);
        st.count += 1;
        st.sum += value;
        for (i, b) in self.buckets.iter().enumerate() {
            if value <= b.upper {
                st.buckets[i] += 1;
            }
        }
    }

    pub fn sum(&self) -> f64 {
        lock(&self.state).sum
    }

    pub fn count(&self) -> u64 {
        lock(&self.state).count
    }

    /// `(upper_bound, cumulative_count)` pairs, ascending, without `+Inf`.
    pub fn bucket_counts(&self) -> Vec<(f64, u64)> {
        let st = lock(&self.state);
        self.buckets
            .iter()
            .zip(st.buckets.iter())
            .map(|(b, c)| (b.upper, *c))
            .collect()
    }

    pub fn collect(&self) -> Vec<Sample> {
        let st = lock(&self.state).clone();
        let name = self.desc.name();

        let mut out = Vec::with_capacity(self.buckets.len() + 3);
        for (b, c) in self.buckets.iter().zip(st.buckets.iter()) {
            out.push(Sample::new(
                format!("{name}_bucket"),
                Arc::clone(&b.labels),
                *c as f64,
            ));
        }
        out.push(Sample::new(
            format!("{name}_bucket"),
            Arc::clone(&self.inf_labels),
            st.count as f64,
        ));
        out.push(self.desc.sample("_sum", st.sum));
        out.push(self.desc.sample("_count", st.count as f64));
        out
    }
}

impl std::fmt::Debug for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Histogram")
            .field("desc", &self.desc)
            .field("bounds", &self.bounds())
            .finish_non_exhaustive()
    }
}
