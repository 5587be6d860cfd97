use std::fmt;

use serde::Serialize;

use crate::rule::Rule;

/// Options controlling how a list source is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Keep the rules after the private domains marker.
    /// When false, parsing stops at the marker.
    pub private_domains: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            private_domains: true,
        }
    }
}

impl ParserOptions {
    /// Create new parser options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether private domains are loaded.
    pub fn with_private_domains(mut self, private_domains: bool) -> Self {
        self.private_domains = private_domains;
        self
    }
}

/// Options controlling how the governing rule is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FindOptions {
    /// Skip rules from the private domains section
    pub ignore_private: bool,
}

impl FindOptions {
    /// Create new find options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether private rules are skipped.
    pub fn with_ignore_private(mut self, ignore_private: bool) -> Self {
        self.ignore_private = ignore_private;
        self
    }
}

/// A domain name split into suffix, registrable label and subdomain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainName {
    /// Public suffix: `co.uk`
    pub tld: String,
    /// Registrable label: `example`
    pub sld: String,
    /// Remaining subdomain labels, possibly empty: `www`
    pub trd: String,
    /// Rule that produced the split
    pub rule: Rule,
}

impl DomainName {
    /// Registrable domain: `sld.tld`.
    pub fn registrable(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }
}

/// Joins the non-empty components, e.g. `www.example.co.uk`.
impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tld.is_empty() {
            Ok(())
        } else if self.sld.is_empty() {
            f.write_str(&self.tld)
        } else if self.trd.is_empty() {
            write!(f, "{}.{}", self.sld, self.tld)
        } else {
            write!(f, "{}.{}.{}", self.trd, self.sld, self.tld)
        }
    }
}
