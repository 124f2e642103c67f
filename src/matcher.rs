//! Longest-match suffix lookup.

use std::sync::Arc;

use log::trace;

use crate::table::{SuffixNode, SuffixTable};

/// Finds the longest known public suffix of a hostname's label sequence.
#[derive(Clone)]
pub struct SuffixMatcher {
    table: Arc<SuffixTable>,
}

impl SuffixMatcher {
    /// Create a matcher over the given table.
    pub fn new(table: Arc<SuffixTable>) -> Self {
        Self { table }
    }

    /// Longest-match suffix depth for labels ordered left-to-right
    /// (e.g. `["www", "google", "co", "uk"]` yields 2).
    ///
    /// Walks from the rightmost label toward the left, descending the
    /// built-in tree and the custom overlay in lockstep, and tracks the
    /// deepest terminal node reached. When both trees hold a node at the
    /// same depth the overlay's terminal marking wins. Returns 0 when no
    /// terminal node is reached (unknown suffix). Matching is ASCII
    /// case-insensitive.
    pub fn match_depth(&self, labels: &[&str]) -> usize {
        let overlay_root = self.table.custom();
        let mut builtin = Some(self.table.builtin());
        let mut overlay = Some(overlay_root.as_ref());
        let mut best = 0;

        for (depth, label) in labels.iter().rev().enumerate() {
            let label = label.to_ascii_lowercase();
            let next_builtin = builtin.and_then(|n| n.child(&label));
            let next_overlay = overlay.and_then(|n| n.child(&label));
            if next_builtin.is_none() && next_overlay.is_none() {
                break;
            }
            let terminal = next_overlay
                .map(SuffixNode::is_terminal)
                .or_else(|| next_builtin.map(SuffixNode::is_terminal))
                .unwrap_or(false);
            if terminal {
                best = depth + 1;
            }
            builtin = next_builtin;
            overlay = next_overlay;
        }

        trace!("suffix depth {} for {} label(s)", best, labels.len());
        best
    }
}
