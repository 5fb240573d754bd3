//! Process-wide default registry.
//!
//! Created lazily on first access and kept for the life of the process.
//! Nothing in this crate reaches for it implicitly: `Registry` values are the
//! primary construct and this is just the conventionally shared one.

use std::sync::{Arc, OnceLock};

use crate::registry::Registry;

static DEFAULT: OnceLock<Arc<Registry>> = OnceLock::new();

/// The shared default registry. Clone the `Arc` to hand it to components
/// that take an owned registry handle.
pub fn default_registry() -> &'static Arc<Registry> {
    DEFAULT.get_or_init(|| Arc::new(Registry::new()))
}
