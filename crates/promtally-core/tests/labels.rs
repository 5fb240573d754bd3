#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promtally_core::labels::is_valid_label_name;
use promtally_core::{Label, LabelSet};

#[test]
fn label_name_rules() {
    for ok in ["a", "_x", "handler", "status_code", "A1_b2"] {
        assert!(is_valid_label_name(ok), "{ok}");
    }
    for bad in ["", "1a", "a-b", "a:b", "é", "a b"] {
        assert!(!is_valid_label_name(bad), "{bad}");
    }
}

#[test]
fn label_construction_validates() {
    let l = Label::new("handler", "test").unwrap();
    assert_eq!(l.name(), "handler");
    assert_eq!(l.value(), "test");

    let e = Label::new("bad-name", "x").unwrap_err();
    assert_eq!(e.kind().as_str(), "VALIDATION");
    let e = Label::new("ok", "").unwrap_err();
    assert_eq!(e.kind().as_str(), "VALIDATION");
}

#[test]
fn add_rejects_and_leaves_set_untouched() {
    let mut set = LabelSet::from_pairs([("a", "1")]).unwrap();
    assert!(set.add("", "x").is_err());
    assert!(set.add("b", "").is_err());
    assert_eq!(set.len(), 1);
    assert_eq!(set.get("a"), Some("1"));
}

#[test]
fn merge_is_pure_and_other_wins() {
    let base = LabelSet::from_pairs([("a", "1"), ("b", "2")]).unwrap();
    let over = LabelSet::from_pairs([("b", "20"), ("c", "3")]).unwrap();

    let merged = base.merge(&over);
    let pairs: Vec<(&str, &str)> = merged.iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "20"), ("c", "3")]);

    assert_eq!(base.get("b"), Some("2"));
    assert_eq!(base.len(), 2);
    assert_eq!(over.len(), 2);
    assert!(!over.contains("a"));
}

#[test]
fn render_block() {
    assert_eq!(LabelSet::new().to_string(), "");

    let mut set = LabelSet::new();
    set.add("zone", "eu").unwrap();
    set.add("app", "api").unwrap();
    assert_eq!(set.to_string(), r#"{app="api",zone="eu"}"#);
}

#[test]
fn insert_prevalidated_label() {
    let mut set = LabelSet::new();
    set.insert(Label::new("k", "v1").unwrap());
    set.insert(Label::new("k", "v2").unwrap());
    assert_eq!(set.len(), 1);
    assert_eq!(set.get("k"), Some("v2"));
}
