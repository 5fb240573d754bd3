//! Golden exposition output vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promtally_core::Registry;

use vector_loader::{load, TestVector};

fn run(v: &TestVector) -> promtally_core::Result<String> {
    let metric = v.metric.build()?;
    for op in &v.ops {
        op.apply(&metric)?;
    }
    let registry = Registry::new();
    registry.register(metric)?;
    Ok(registry.collect())
}

#[test]
fn exposition_vectors() {
    let files = [
        "counter_plain.json",
        "counter_labels.json",
        "counter_negative.json",
        "gauge_fold.json",
        "histogram_basic.json",
        "histogram_labels.json",
        "histogram_reserved_le.json",
        "summary_basic.json",
        "bad_metric_name.json",
        "empty_label_value.json",
        "label_escaping.json",
    ];

    for f in files {
        let v = load(f);
        let res = run(&v);

        if let Some(err) = &v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.kind().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let text = res.expect("expected exposition text");
        let lines: Vec<&str> = text.lines().collect();
        let expect = v.expect_lines.as_ref().expect("missing expect_lines");
        assert_eq!(lines, *expect, "vector={}", v.description);
        assert!(text.ends_with('\n'), "vector={}", v.description);
    }
}
