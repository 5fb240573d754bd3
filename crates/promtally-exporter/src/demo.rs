//! Demo instrumentation driven by a background tick task.
//!
//! Registers one metric of every kind and mutates them on an interval so a
//! scraper pointed at the exporter sees values move.

use std::sync::Arc;
use std::time::{Duration, Instant};

use promtally_core::error::Result;
use promtally_core::{Counter, Gauge, Histogram, LabelSet, Metric, Registry, Summary};

/// Register every metric or none: on the first failure, the ones already
/// added are removed again before the error is returned.
fn register_all(registry: &Registry, metrics: impl IntoIterator<Item = Metric>) -> Result<()> {
    let mut added: Vec<String> = Vec::new();
    for m in metrics {
        let name = m.name().to_string();
        if let Err(e) = registry.register(m) {
            for n in &added {
                registry.unregister(n);
            }
            return Err(e);
        }
        added.push(name);
    }
    Ok(())
}

pub struct DemoMetrics {
    started: Instant,
    ticks: Arc<Counter>,
    uptime: Arc<Gauge>,
    work: Arc<Histogram>,
    batch: Arc<Summary>,
}

impl DemoMetrics {
    pub fn register(registry: &Registry) -> Result<Self> {
        let labels = LabelSet::from_pairs([("source", "demo")])?;

        let ticks = Arc::new(Counter::new(
            "demo_ticks_total",
            "Demo ticks processed.",
            labels.clone(),
        )?);
        let uptime = Arc::new(Gauge::new(
            "demo_uptime_seconds",
            "Seconds since the demo started.",
            labels.clone(),
        )?);
        let work = Arc::new(Histogram::new(
            "demo_work_seconds",
            "Simulated work duration per tick.",
            &[0.01, 0.025, 0.05, 0.1],
            labels.clone(),
        )?);
        let batch = Arc::new(Summary::new("demo_batch_items", "Items handled per tick.", labels)?);

        let all: [Metric; 4] = [
            Arc::clone(&ticks).into(),
            Arc::clone(&uptime).into(),
            Arc::clone(&work).into(),
            Arc::clone(&batch).into(),
        ];
        register_all(registry, all)?;

        Ok(Self {
            started: Instant::now(),
            ticks,
            uptime,
            work,
            batch,
        })
    }

    /// Advance the demo by one tick.
    pub fn tick(&self) {
        self.ticks.inc();
        let n = self.ticks.value() as u64;
        self.uptime.set(self.started.elapsed().as_secs_f64());
        self.work.observe(((n % 10) + 1) as f64 * 0.01);
        self.batch.observe((n % 7) as f64);
    }

    /// Tick forever on `interval`. Runs until the runtime shuts down.
    pub fn spawn(self, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut every = tokio::time::interval(interval);
            loop {
                every.tick().await;
                self.tick();
            }
        })
    }
}
