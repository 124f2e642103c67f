//! Boundary adapter between the engine and a URI collaborator.

use crate::decompose::HostDecomposer;
use crate::types::{HostPart, HostParts};

/// The seam to the owning URI object.
///
/// The engine only reads and writes the host string; everything else
/// (scheme, path, query, re-rendering the full URI text) stays with the
/// implementor. `set_host` implementations are expected to trigger
/// whatever re-stringification the URI needs.
pub trait HostUri {
    /// Current hostname, or `None` when the URI has no authority
    /// component (e.g. an empty or relative URI).
    fn host(&self) -> Option<&str>;

    /// Replace the hostname. `None` removes it.
    fn set_host(&mut self, host: Option<String>);
}

/// Derived accessors for a URI's host parts.
///
/// Carries no state of its own: every getter re-derives the parts from
/// the URI's current host, and every setter writes the rebuilt host
/// straight back. The host string stays the single source of truth, so
/// the three derived fields can never drift out of sync with it.
pub struct HostAccessor<'a, U: HostUri> {
    uri: &'a mut U,
    decomposer: &'a HostDecomposer,
}

impl<'a, U: HostUri> HostAccessor<'a, U> {
    /// Wrap a URI with the given decomposer.
    pub fn new(uri: &'a mut U, decomposer: &'a HostDecomposer) -> Self {
        Self { uri, decomposer }
    }

    fn parts(&self) -> HostParts {
        match self.uri.host() {
            Some(host) => self.decomposer.decompose(host),
            None => HostParts::default(),
        }
    }

    /// The matched public suffix of the current host.
    pub fn tld(&self) -> Option<String> {
        self.parts().tld
    }

    /// The registrable domain of the current host.
    pub fn domain(&self) -> Option<String> {
        self.parts().domain
    }

    /// The subdomain of the current host (empty string when the host has
    /// no labels left of the domain).
    pub fn subdomain(&self) -> Option<String> {
        self.parts().subdomain
    }

    fn write_part(&mut self, part: HostPart, value: &str) {
        let host = self.uri.host().unwrap_or("").to_string();
        let rebuilt = self.decomposer.set_part(&host, part, value);
        let new_host = if rebuilt.is_empty() { None } else { Some(rebuilt) };
        self.uri.set_host(new_host);
    }

    /// Rewrite the tld, leaving subdomain and domain unchanged.
    pub fn set_tld(&mut self, value: &str) {
        self.write_part(HostPart::Tld, value);
    }

    /// Rewrite the domain, leaving subdomain and tld unchanged.
    pub fn set_domain(&mut self, value: &str) {
        self.write_part(HostPart::Domain, value);
    }

    /// Rewrite the subdomain, leaving domain and tld unchanged.
    pub fn set_subdomain(&mut self, value: &str) {
        self.write_part(HostPart::Subdomain, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SuffixTable;
    use std::sync::Arc;

    /// Minimal URI stand-in: keeps a host and re-renders a URI string on
    /// every host write, the way a real collaborator would.
    #[derive(Default)]
    struct TestUri {
        host: Option<String>,
        rendered: String,
    }

    impl TestUri {
        fn with_host(host: &str) -> Self {
            let mut uri = Self::default();
            uri.set_host(Some(host.to_string()));
            uri
        }
    }

    impl HostUri for TestUri {
        fn host(&self) -> Option<&str> {
            self.host.as_deref()
        }

        fn set_host(&mut self, host: Option<String>) {
            self.host = host;
            self.rendered = match &self.host {
                Some(h) => format!("http://{}", h),
                None => String::new(),
            };
        }
    }

    fn decomposer() -> HostDecomposer {
        HostDecomposer::new(Arc::new(SuffixTable::from_list("com\nuk\nco.uk\n")))
    }

    #[test]
    fn test_getters_derive_from_host() {
        let d = decomposer();
        let mut uri = TestUri::with_host("www.google.com");
        let accessor = HostAccessor::new(&mut uri, &d);

        assert_eq!(accessor.tld().as_deref(), Some("com"));
        assert_eq!(accessor.domain().as_deref(), Some("google"));
        assert_eq!(accessor.subdomain().as_deref(), Some("www"));
    }

    #[test]
    fn test_absent_host_yields_absent_parts() {
        let d = decomposer();
        let mut uri = TestUri::default();
        let accessor = HostAccessor::new(&mut uri, &d);

        assert_eq!(accessor.tld(), None);
        assert_eq!(accessor.domain(), None);
        assert_eq!(accessor.subdomain(), None);
    }

    #[test]
    fn test_setters_write_back_and_rerender() {
        let d = decomposer();
        let mut uri = TestUri::with_host("www.google.com");

        HostAccessor::new(&mut uri, &d).set_subdomain("www2");
        assert_eq!(uri.rendered, "http://www2.google.com");

        HostAccessor::new(&mut uri, &d).set_domain("amazon");
        assert_eq!(uri.rendered, "http://www2.amazon.com");

        HostAccessor::new(&mut uri, &d).set_tld("co.uk");
        assert_eq!(uri.rendered, "http://www2.amazon.co.uk");
    }

    #[test]
    fn test_getters_follow_external_host_change() {
        // The collaborator may rewrite host itself; getters must follow.
        let d = decomposer();
        let mut uri = TestUri::with_host("www.google.com");

        uri.set_host(Some("www2.google.co.uk".to_string()));

        let accessor = HostAccessor::new(&mut uri, &d);
        assert_eq!(accessor.tld().as_deref(), Some("co.uk"));
        assert_eq!(accessor.domain().as_deref(), Some("google"));
        assert_eq!(accessor.subdomain().as_deref(), Some("www2"));
    }

    #[test]
    fn test_setting_on_absent_host_creates_it() {
        let d = decomposer();
        let mut uri = TestUri::default();

        HostAccessor::new(&mut uri, &d).set_domain("google");
        assert_eq!(uri.host(), Some("google"));
    }
}
