//! Shared application state for the exporter.
//!
//! Holds the validated config, the registry being served, and the exporter's
//! own scrape instrumentation (registered on that same registry so scrapes
//! show up in their own output).

use std::sync::Arc;

use promtally_core::error::Result;
use promtally_core::{Counter, Histogram, LabelSet, Registry, DEFAULT_BUCKETS};

use crate::config::ExporterConfig;

pub const SCRAPES_TOTAL: &str = "promtally_scrapes_total";
pub const SCRAPE_DURATION: &str = "promtally_scrape_duration_seconds";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Arc<Registry>,
    scrapes: Arc<Counter>,
    scrape_duration: Arc<Histogram>,
}

impl AppState {
    /// Build state and register the scrape metrics.
    /// Fails if the registry already carries metrics under those names.
    pub fn new(cfg: ExporterConfig, registry: Arc<Registry>) -> Result<Self> {
        let scrapes = Arc::new(Counter::new(
            SCRAPES_TOTAL,
            "Scrapes served by this exporter.",
            LabelSet::new(),
        )?);
        let scrape_duration = Arc::new(Histogram::new(
            SCRAPE_DURATION,
            "Time spent rendering the exposition text.",
            &DEFAULT_BUCKETS,
            LabelSet::new(),
        )?);

        registry.register(Arc::clone(&scrapes))?;
        if let Err(e) = registry.register(Arc::clone(&scrape_duration)) {
            registry.unregister(SCRAPES_TOTAL);
            return Err(e);
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                scrapes,
                scrape_duration,
            }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.inner.registry)
    }

    /// Render the registry and account for the scrape.
    pub fn scrape(&self) -> String {
        let started = std::time::Instant::now();
        let body = self.inner.registry.collect();
        self.inner.scrapes.inc();
        self.inner
            .scrape_duration
            .observe(started.elapsed().as_secs_f64());
        tracing::trace!(bytes = body.len(), "scrape rendered");
        body
    }
}
