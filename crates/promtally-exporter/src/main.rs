//! promtally exporter binary.
//!
//! - Loads `promtally.yaml` (or the path given as the first argument)
//! - Registers demo metrics on the default registry and ticks them
//! - Serves the default registry at the configured metrics path

use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use promtally_core::default_registry;
use promtally_core::error::{MetricsError, Result};
use promtally_exporter::{app_state::AppState, config, demo::DemoMetrics, router};

const DEFAULT_CONFIG_PATH: &str = "promtally.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, kind = e.kind().as_str(), "promtally-exporter failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.exporter.listen_addr()?;
    let interval = Duration::from_millis(cfg.exporter.demo_interval_ms);

    let registry = default_registry();
    let demo = DemoMetrics::register(registry)?;
    let _ticker = demo.spawn(interval);

    let state = AppState::new(cfg, std::sync::Arc::clone(registry))?;
    let metrics_path = state.cfg().exporter.metrics_path.clone();
    let app = router::build_router(state);

    tracing::info!(%listen, %metrics_path, "promtally-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MetricsError::Io(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MetricsError::Io(format!("server failed: {e}")))?;

    tracing::info!("promtally-exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
