#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use promtally_core::{default_registry, Gauge, LabelSet};

#[test]
fn default_registry_is_one_shared_instance() {
    assert!(Arc::ptr_eq(default_registry(), default_registry()));

    default_registry()
        .register(Gauge::new("core_default_probe", "probe", LabelSet::new()).unwrap())
        .unwrap();
    assert!(default_registry().contains("core_default_probe"));
    default_registry().unregister("core_default_probe");
    assert!(!default_registry().contains("core_default_probe"));
}
