//! Host Engine - A fast public-suffix matching and hostname decomposition engine for Rust
//!
//! This library splits internet hostnames into their three semantic parts
//! and keeps them consistent under mutation:
//! - Longest-match public suffix lookup (multi-label suffixes like `co.uk`)
//! - Registrable domain and subdomain extraction
//! - Rebuilding the host string when any one part is rewritten
//! - A user-extensible custom suffix overlay on top of the built-in dataset
//! - A thin adapter trait for wiring the engine into a URI type
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use host_engine_r::{HostDecomposer, HostPart, SuffixTable};
//!
//! let table = Arc::new(SuffixTable::new());
//! let decomposer = HostDecomposer::new(table.clone());
//!
//! let parts = decomposer.decompose("www.foo.bar.baz.co.uk");
//! assert_eq!(parts.tld.as_deref(), Some("co.uk"));
//! assert_eq!(parts.domain.as_deref(), Some("baz"));
//! assert_eq!(parts.subdomain.as_deref(), Some("www.foo.bar"));
//!
//! // Rewrite one part; the other two come through unchanged
//! let host = decomposer.set_part("www.google.com", HostPart::Tld, "co.uk");
//! assert_eq!(host, "www.google.co.uk");
//!
//! // Teach the table a custom suffix
//! table.set_custom_json(&serde_json::json!({ "foobar": {} })).unwrap();
//! let parts = decomposer.decompose("www.bart-blabla.foobar");
//! assert_eq!(parts.tld.as_deref(), Some("foobar"));
//! ```
//!
//! # Decomposition rules
//!
//! | Host | subdomain | domain | tld |
//! |------|-----------|--------|-----|
//! | `""` | absent | absent | absent |
//! | `google.com` | `""` | `google` | `com` |
//! | `www.foo.bar.baz.co.uk` | `www.foo.bar` | `baz` | `co.uk` |
//! | `bart-blabla.unknown` | `""` | `unknown`* | `""` |
//! | `co.uk` | absent | absent | `co.uk` |
//!
//! *With an unknown suffix the last label is always treated as the domain.
//!
//! Decomposition never fails: malformed or empty input degrades to absent
//! or empty parts, and setter values are accepted verbatim without
//! validation against the table.

pub mod accessor;
pub mod decompose;
pub mod error;
pub mod matcher;
pub mod table;
pub mod types;

// Re-export commonly used items
pub use accessor::{HostAccessor, HostUri};
pub use decompose::HostDecomposer;
pub use error::{HostError, Result};
pub use matcher::SuffixMatcher;
pub use table::{SuffixEntry, SuffixNode, SuffixTable};
pub use types::{HostPart, HostParts};
