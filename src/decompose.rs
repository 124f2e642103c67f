//! Hostname decomposition and recomposition.
//!
//! Splits a hostname into `{subdomain, domain, tld}` against a suffix
//! table and rebuilds the host string when any one part is rewritten. The
//! host string is never cached here: every decomposition re-runs the
//! matcher against the current table, so results always reflect the
//! latest custom overlay.

use std::sync::Arc;

use crate::matcher::SuffixMatcher;
use crate::table::SuffixTable;
use crate::types::{HostPart, HostParts};

/// Splits hostnames into subdomain / domain / tld and rebuilds them.
#[derive(Clone)]
pub struct HostDecomposer {
    matcher: SuffixMatcher,
}

impl HostDecomposer {
    /// Create a decomposer over the given table.
    pub fn new(table: Arc<SuffixTable>) -> Self {
        Self {
            matcher: SuffixMatcher::new(table),
        }
    }

    /// Split `host` into its three parts.
    ///
    /// - Empty host: all parts absent.
    /// - Unknown suffix: `tld` is the empty string, the last label is the
    ///   domain and the remaining labels (possibly none) are the
    ///   subdomain. This holds uniformly down to single-label hosts,
    ///   where the lone label becomes the domain.
    /// - Host is exactly a known suffix: only `tld` is present.
    ///
    /// Matching is case-insensitive; output preserves the input's case.
    pub fn decompose(&self, host: &str) -> HostParts {
        if host.is_empty() {
            return HostParts::default();
        }

        let labels: Vec<&str> = host.split('.').collect();
        let depth = self.matcher.match_depth(&labels);
        let count = labels.len();

        if depth == count {
            return HostParts {
                subdomain: None,
                domain: None,
                tld: Some(host.to_string()),
            };
        }

        HostParts {
            subdomain: Some(labels[..count - depth - 1].join(".")),
            domain: Some(labels[count - depth - 1].to_string()),
            tld: Some(labels[count - depth..].join(".")),
        }
    }

    /// Join the non-absent, non-empty parts back into a host string, in
    /// subdomain -> domain -> tld order.
    pub fn recompose(&self, parts: &HostParts) -> String {
        let mut host = String::new();
        for part in [&parts.subdomain, &parts.domain, &parts.tld] {
            match part {
                Some(value) if !value.is_empty() => {
                    if !host.is_empty() {
                        host.push('.');
                    }
                    host.push_str(value);
                }
                _ => {}
            }
        }
        host
    }

    /// Replace exactly one part of `host` and rebuild it.
    ///
    /// The other two parts come through unchanged. The new value is
    /// accepted verbatim; a multi-label `tld` such as `"co.uk"` becomes
    /// the new trailing label sequence without consulting the table.
    pub fn set_part(&self, host: &str, part: HostPart, value: &str) -> String {
        let mut parts = self.decompose(host);
        parts.set(part, Some(value.to_string()));
        self.recompose(&parts)
    }
}
