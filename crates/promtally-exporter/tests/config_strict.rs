#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promtally_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listen: "127.0.0.1:9464"
  metric_path: "/m" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.exporter.listen, "0.0.0.0:9464");
    assert_eq!(cfg.exporter.metrics_path, "/metrics");
    assert_eq!(cfg.exporter.demo_interval_ms, 1000);
}

#[test]
fn rejects_out_of_range_values() {
    let cases = [
        "version: 2\n",
        "version: 1\nexporter:\n  listen: \"not-an-addr\"\n",
        "version: 1\nexporter:\n  metrics_path: \"metrics\"\n",
        "version: 1\nexporter:\n  metrics_path: \"/\"\n",
        "version: 1\nexporter:\n  metrics_path: \"/healthz\"\n",
        "version: 1\nexporter:\n  demo_interval_ms: 5\n",
    ];
    for c in cases {
        let err = config::load_from_str(c).expect_err(c);
        assert_eq!(err.kind().as_str(), "CONFIG", "{c}");
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = config::load_from_file("definitely/not/here.yaml").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "IO");
}
