/// Which hostname part an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPart {
    Subdomain,
    Domain,
    Tld,
}

/// Decomposed hostname parts.
///
/// `None` means the part is absent (no host at all, or no labels left for
/// it); `Some("")` means the part exists but is empty, e.g. a host with a
/// recognized suffix and no subdomain. The two are deliberately distinct:
/// `decompose("")` yields all-`None`, while `decompose("google.com")`
/// yields an empty-string subdomain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostParts {
    /// Labels left of the registrable domain, joined by '.'
    pub subdomain: Option<String>,
    /// The single registrable label immediately left of the suffix
    pub domain: Option<String>,
    /// The matched public suffix, possibly multi-label (e.g. "co.uk")
    pub tld: Option<String>,
}

impl HostParts {
    /// Read the named part.
    pub fn get(&self, part: HostPart) -> Option<&str> {
        match part {
            HostPart::Subdomain => self.subdomain.as_deref(),
            HostPart::Domain => self.domain.as_deref(),
            HostPart::Tld => self.tld.as_deref(),
        }
    }

    /// Replace the named part.
    pub fn set(&mut self, part: HostPart, value: Option<String>) {
        match part {
            HostPart::Subdomain => self.subdomain = value,
            HostPart::Domain => self.domain = value,
            HostPart::Tld => self.tld = value,
        }
    }

    /// True when all three parts are absent (no host to decompose).
    pub fn is_absent(&self) -> bool {
        self.subdomain.is_none() && self.domain.is_none() && self.tld.is_none()
    }
}
