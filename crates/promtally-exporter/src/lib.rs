//! promtally exporter library entry.
//!
//! Serves a `Registry` over HTTP in the text exposition format. The core
//! crate only produces the string; this crate wires config, state and an
//! axum router around it. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod demo;
pub mod ops;
pub mod router;
