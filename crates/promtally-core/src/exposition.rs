//! Prometheus text exposition format.
//!
//! Formatting is a pure function over a snapshot of metric families; the
//! registry takes the snapshot first, so nothing here touches a lock.
//!
//! ```text
//! # HELP <name> <help>
//! # TYPE <name> <type>
//! <sample_name><label_block> <value>[ <timestamp>]
//! ```

use std::fmt::Write;

use crate::metric::MetricType;
use crate::sample::Sample;

/// HTTP content type for the text format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// One metric's header data plus the samples it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: String,
    pub help: String,
    pub metric_type: MetricType,
    pub samples: Vec<Sample>,
}

/// Render families in the given order.
pub fn render(families: &[MetricFamily]) -> String {
    let mut out = String::new();
    for fam in families {
        render_family(fam, &mut out);
    }
    out
}

fn render_family(fam: &MetricFamily, out: &mut String) {
    let _ = writeln!(out, "# HELP {} {}", fam.name, escape_help(&fam.help));
    let _ = writeln!(out, "# TYPE {} {}", fam.name, fam.metric_type.as_str());
    for s in &fam.samples {
        render_sample(s, out);
    }
}

fn render_sample(s: &Sample, out: &mut String) {
    let _ = write!(out, "{}{} {}", s.name, s.labels, format_value(s.value));
    if let Some(ts) = s.timestamp {
        let _ = write!(out, " {ts}");
    }
    out.push('\n');
}

/// Shortest round-trip decimal form; `+Inf`, `-Inf`, `NaN` for the rest.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}

/// Bucket bound for the `le` label. Whole numbers keep one fractional digit
/// (`1.0`), everything else uses the shortest form (`0.005`).
pub fn format_bound(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format_value(v)
    }
}

fn escape_help(h: &str) -> String {
    h.replace('\\', "\\\\").replace('\n', "\\n")
}
