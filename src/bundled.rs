//! Prebuilt list shipped with the crate.
//!
//! The embedded source is an excerpt of the Public Suffix List; load the full
//! list with [`List::from_file`] for production lookups.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::cookie::CookieJarList;
use crate::list::List;
use crate::types::ParserOptions;

/// Name reported by the bundled cookie jar list.
pub const BUNDLED_LIST_VERSION: &str = "publicsuffix.org excerpt (bundled)";

static BUNDLED_SOURCE: &str = include_str!("../data/public_suffix_list.dat");

static BUNDLED: Lazy<Arc<List>> =
    Lazy::new(|| Arc::new(List::parse(BUNDLED_SOURCE, &ParserOptions::default())));

/// Text of the embedded list source.
pub fn source() -> &'static str {
    BUNDLED_SOURCE
}

/// Shared list built from the embedded source, private domains included.
///
/// Parsed on first use; later calls share the same list.
pub fn bundled_list() -> Arc<List> {
    Arc::clone(&BUNDLED)
}

/// Fresh list built from the ICANN section of the embedded source.
pub fn icann_list() -> List {
    List::parse(
        BUNDLED_SOURCE,
        &ParserOptions::new().with_private_domains(false),
    )
}

/// Cookie jar adapter over [`bundled_list`].
pub fn cookie_jar_list() -> CookieJarList {
    CookieJarList::new(bundled_list(), BUNDLED_LIST_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookie::PublicSuffixList;
    use crate::types::FindOptions;

    #[test]
    fn test_bundled_list_is_shared() {
        let a = bundled_list();
        let b = bundled_list();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.is_empty());
    }

    #[test]
    fn test_bundled_list_has_private_rules() {
        let list = bundled_list();
        assert!(list.rules().any(|r| r.is_private()));
        let rule = list.find("foo.github.io", &FindOptions::default());
        assert_eq!(rule.value(), "github.io");
    }

    #[test]
    fn test_icann_list() {
        let list = icann_list();
        assert!(list.rules().all(|r| !r.is_private()));
        assert!(list.len() < bundled_list().len());
        let rule = list.find("foo.github.io", &FindOptions::default());
        assert_eq!(rule.value(), "io");
    }

    #[test]
    fn test_cookie_jar_list() {
        let jar = cookie_jar_list();
        assert_eq!(jar.name(), BUNDLED_LIST_VERSION);
        assert_eq!(jar.public_suffix("www.example.co.uk"), "co.uk");
    }

    #[test]
    fn test_source() {
        assert!(source().contains("===BEGIN PRIVATE DOMAINS==="));
    }
}
