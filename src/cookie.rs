//! Cookie jar integration.
//!
//! Cookie jars only need the public suffix of a domain to decide how widely a
//! cookie may be scoped. [`PublicSuffixList`] is that narrow interface and
//! [`CookieJarList`] serves it from any [`SuffixFinder`].

use std::sync::Arc;

use crate::domain::public_suffix;
use crate::list::SuffixFinder;

/// Trait for cookie-jar public suffix providers
pub trait PublicSuffixList: Send + Sync {
    /// Public suffix of the domain, or an empty string.
    ///
    /// Implementations must not fail on malformed input.
    fn public_suffix(&self, domain: &str) -> String;

    /// Describes the source of the list, e.g. its version.
    fn name(&self) -> String;
}

/// [`PublicSuffixList`] backed by a shared suffix finder.
#[derive(Clone)]
pub struct CookieJarList {
    finder: Arc<dyn SuffixFinder>,
    version: String,
}

impl CookieJarList {
    /// Create an adapter over the finder, reporting `version` as its name.
    pub fn new(finder: Arc<dyn SuffixFinder>, version: impl Into<String>) -> Self {
        Self {
            finder,
            version: version.into(),
        }
    }
}

impl PublicSuffixList for CookieJarList {
    fn public_suffix(&self, domain: &str) -> String {
        public_suffix(self.finder.as_ref(), domain)
    }

    fn name(&self) -> String {
        self.version.clone()
    }
}

impl std::fmt::Debug for CookieJarList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieJarList")
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachedList;
    use crate::list::List;
    use crate::types::ParserOptions;

    const SOURCE: &str = "uk\nco.uk\n*.ck\n!www.ck\n// ===BEGIN PRIVATE DOMAINS===\nblogspot.co.uk\n";

    fn jar() -> CookieJarList {
        let list = List::parse(SOURCE, &ParserOptions::default());
        CookieJarList::new(Arc::new(list), "test-list")
    }

    #[test]
    fn test_public_suffix() {
        let jar = jar();
        assert_eq!(jar.public_suffix("www.example.co.uk"), "co.uk");
        assert_eq!(jar.public_suffix("foo.blogspot.co.uk"), "blogspot.co.uk");
        assert_eq!(jar.public_suffix("www.ck"), "ck");
        assert_eq!(jar.public_suffix("www.example.ck"), "example.ck");
    }

    #[test]
    fn test_public_suffix_swallows_errors() {
        let jar = jar();
        assert_eq!(jar.public_suffix(""), "");
        assert_eq!(jar.public_suffix("co.uk"), "");
        assert_eq!(jar.public_suffix(".co.uk"), "");
    }

    #[test]
    fn test_name() {
        assert_eq!(jar().name(), "test-list");
    }

    #[test]
    fn test_cached_finder() {
        let list = List::parse(SOURCE, &ParserOptions::default());
        let jar = CookieJarList::new(Arc::new(CachedList::new(list, 8)), "cached");
        assert_eq!(jar.public_suffix("www.example.co.uk"), "co.uk");
        assert_eq!(jar.public_suffix("www.example.co.uk"), "co.uk");
    }

    #[test]
    fn test_trait_object() {
        let providers: Vec<Box<dyn PublicSuffixList>> = vec![Box::new(jar())];
        assert_eq!(providers[0].public_suffix("example.co.uk"), "co.uk");
    }
}
