//! Hierarchical suffix table.
//!
//! Public suffixes are stored as a tree keyed by single domain labels,
//! read right-to-left: `co.uk` lives at root -> `uk` -> `co`. The built-in
//! dataset is embedded at compile time and parsed once per process; custom
//! entries form an overlay that is replaced wholesale and consulted with
//! precedence over the built-in tree.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::error::{HostError, Result};

/// Built-in public suffix dataset, parsed once per process.
static BUILTIN: Lazy<Arc<SuffixNode>> =
    Lazy::new(|| Arc::new(SuffixNode::from_list(include_str!("../data/suffixes.dat"))));

/// A single node in the suffix tree, keyed by one lowercase domain label.
///
/// `terminal` marks that a suffix ending at this node is a recognized
/// public suffix; non-terminal interior nodes exist only as path segments
/// of deeper suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixNode {
    terminal: bool,
    children: HashMap<String, SuffixNode>,
}

impl SuffixNode {
    /// Build a tree from a suffix list: one dotted suffix per line,
    /// `#` comments and blank lines ignored.
    pub fn from_list(text: &str) -> Self {
        let mut root = SuffixNode::default();
        for line in text.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            root.insert_suffix(line);
        }
        root
    }

    /// Insert a dotted suffix, descending from the rightmost label.
    /// Only the final label's node is marked terminal.
    fn insert_suffix(&mut self, suffix: &str) {
        let labels: Vec<&str> = suffix.split('.').filter(|l| !l.is_empty()).collect();
        if labels.is_empty() {
            return;
        }
        let mut node = self;
        for label in labels.into_iter().rev() {
            node = node
                .children
                .entry(label.to_ascii_lowercase())
                .or_default();
        }
        node.terminal = true;
    }

    /// Build an overlay tree from nested custom entries. Every overlay
    /// node is terminal: declaring `foo.bar` also recognizes `bar`.
    fn from_entries(entries: &HashMap<String, SuffixEntry>) -> Self {
        let mut node = SuffixNode::default();
        for (label, entry) in entries {
            let mut child = SuffixNode::from_entries(&entry.0);
            child.terminal = true;
            node.children.insert(label.to_ascii_lowercase(), child);
        }
        node
    }

    /// Build an overlay tree from a JSON value of the same nested-mapping
    /// shape. Fails fast on any non-object value in the nesting.
    fn from_json(value: &serde_json::Value, path: &str) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| HostError::InvalidOverlayEntry {
            path: path.to_string(),
            found: json_type_name(value).to_string(),
        })?;

        let mut node = SuffixNode::default();
        for (label, nested) in map {
            let child_path = if path.is_empty() {
                label.clone()
            } else {
                format!("{}.{}", label, path)
            };
            let mut child = SuffixNode::from_json(nested, &child_path)?;
            child.terminal = true;
            node.children.insert(label.to_ascii_lowercase(), child);
        }
        Ok(node)
    }

    /// Child node for a label, if present. Labels are stored lowercase;
    /// the caller is expected to lowercase before lookup.
    pub fn child(&self, label: &str) -> Option<&SuffixNode> {
        self.children.get(label)
    }

    /// Whether a suffix ending at this node is a recognized public suffix.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Nested custom suffix entries: label to further labels, recursively.
///
/// `{"bar": {"foo": {}}}` declares `foo.bar` (and `bar`) as suffixes.
/// The shape mirrors the tree itself, rooted one level below the top
/// label, so multi-label custom suffixes nest naturally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SuffixEntry(pub HashMap<String, SuffixEntry>);

/// Public suffix table: the immutable built-in tree plus a replaceable
/// custom overlay.
///
/// The overlay is swapped as a whole `Arc`, never edited in place, so
/// concurrent readers always observe either the previous or the new
/// overlay, never a partially-updated tree.
pub struct SuffixTable {
    builtin: Arc<SuffixNode>,
    custom: RwLock<Arc<SuffixNode>>,
}

impl SuffixTable {
    /// Create a table backed by the embedded built-in dataset and an
    /// empty custom overlay.
    pub fn new() -> Self {
        Self {
            builtin: BUILTIN.clone(),
            custom: RwLock::new(Arc::new(SuffixNode::default())),
        }
    }

    /// Create a table from a caller-supplied suffix list instead of the
    /// embedded dataset. Intended for tests and embedders that ship their
    /// own snapshot.
    pub fn from_list(text: &str) -> Self {
        Self {
            builtin: Arc::new(SuffixNode::from_list(text)),
            custom: RwLock::new(Arc::new(SuffixNode::default())),
        }
    }

    /// Replace the custom overlay with the given nested entries,
    /// discarding any previously set overlay.
    pub fn set_custom(&self, entries: &HashMap<String, SuffixEntry>) {
        let node = SuffixNode::from_entries(entries);
        debug!("custom suffix overlay replaced ({} top-level entries)", node.child_count());
        *self.custom.write() = Arc::new(node);
    }

    /// Replace the custom overlay from a JSON value of the same
    /// nested-mapping shape. A non-object value anywhere in the nesting
    /// fails fast and leaves the current overlay untouched.
    pub fn set_custom_json(&self, value: &serde_json::Value) -> Result<()> {
        let node = SuffixNode::from_json(value, "")?;
        debug!("custom suffix overlay replaced ({} top-level entries)", node.child_count());
        *self.custom.write() = Arc::new(node);
        Ok(())
    }

    /// Drop the custom overlay.
    pub fn clear_custom(&self) {
        *self.custom.write() = Arc::new(SuffixNode::default());
    }

    /// The built-in suffix tree.
    pub fn builtin(&self) -> &SuffixNode {
        &self.builtin
    }

    /// Snapshot of the current custom overlay.
    pub fn custom(&self) -> Arc<SuffixNode> {
        self.custom.read().clone()
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::new()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
