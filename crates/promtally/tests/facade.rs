//! Facade tests. They share the process-wide default registry, so everything
//! runs inside one test function to keep the assertions ordered.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promtally::{
    clear_registry, collect_all, create_counter, create_gauge, create_histogram, create_summary,
    register_metric, unregister_metric, Counter, LabelSet, Registry,
};

#[test]
fn default_registry_facade() {
    clear_registry();

    let labels = LabelSet::from_pairs([("handler", "test")]).unwrap();
    let c = create_counter("http_requests_total", "Total requests", Some(labels)).unwrap();
    c.inc();
    let g = create_gauge("temperature", "Current temperature", None).unwrap();
    g.set(21.5);
    let h = create_histogram("latency", "Latency", &[1.0, 2.0, 5.0], None).unwrap();
    for v in [1.5, 2.5, 4.5] {
        h.observe(v);
    }
    let s = create_summary("sizes", "Sizes", None).unwrap();
    for v in [2.0, 4.0, 6.0] {
        s.observe(v);
    }

    let text = collect_all();
    assert!(text.contains("http_requests_total{handler=\"test\"} 1\n"));
    assert!(text.contains("temperature 21.5\n"));
    assert!(text.contains("latency_bucket{le=\"2.0\"} 1\n"));
    assert!(text.contains("latency_bucket{le=\"+Inf\"} 3\n"));
    assert!(text.contains("latency_sum 8.5\n"));
    assert!(text.contains("sizes_sum 12\nsizes_count 3\n"));

    let err = create_gauge("temperature", "again", None).unwrap_err();
    assert_eq!(err.kind().as_str(), "DUPLICATE");

    let extra = Counter::new("manual_total", "Manual", LabelSet::new()).unwrap();
    register_metric(extra).unwrap();
    assert!(collect_all().contains("# TYPE manual_total counter\n"));

    assert!(unregister_metric("manual_total").is_some());
    assert!(unregister_metric("manual_total").is_none());
    assert!(!collect_all().contains("manual_total"));

    // independent registries never see default members
    let own = Registry::new();
    assert_eq!(own.collect(), "");

    clear_registry();
    assert_eq!(collect_all(), "");
}
