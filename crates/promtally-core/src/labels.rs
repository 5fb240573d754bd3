//! Label model: validated name/value pairs and label sets.
//!
//! Label sets keep their entries sorted by name so the rendered label block
//! is deterministic regardless of insertion order. Validation happens at
//! construction; nothing is re-checked at scrape time.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{MetricsError, Result};

/// Returns true when `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check(name: &str, value: &str) -> Result<()> {
    if !is_valid_label_name(name) {
        return Err(MetricsError::InvalidLabelName(name.to_string()));
    }
    if value.is_empty() {
        return Err(MetricsError::EmptyLabelValue(name.to_string()));
    }
    Ok(())
}

/// A single validated label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    name: String,
    value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        check(&name, &value)?;
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Label name -> value mapping, unique names, sorted iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LabelSet {
    entries: BTreeMap<String, String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(name, value)` pairs. Later pairs win on repeated names.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (k, v) in pairs {
            set.add(k, v)?;
        }
        Ok(set)
    }

    /// Insert or replace one label.
    ///
    /// Only meant for building a set before it is attached to a metric;
    /// attached sets are shared behind `Arc` and never mutated.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        let value = value.into();
        check(&name, &value)?;
        self.entries.insert(name, value);
        Ok(())
    }

    /// Insert an already validated label.
    pub fn insert(&mut self, label: Label) {
        self.entries.insert(label.name, label.value);
    }

    /// Union of both sets; `other` wins on name collisions. Neither input changes.
    pub fn merge(&self, other: &LabelSet) -> LabelSet {
        let mut entries = self.entries.clone();
        for (k, v) in &other.entries {
            entries.insert(k.clone(), v.clone());
        }
        LabelSet { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over `(name, value)` in name order.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Escape a label value for the quoted exposition form.
pub(crate) fn escape_label_value(v: &str) -> String {
    v.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Renders the exposition label block: empty string for an empty set,
/// otherwise `{a="1",b="2"}`.
impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return Ok(());
        }
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}=\"{}\"", k, escape_label_value(v))?;
        }
        f.write_str("}")
    }
}
