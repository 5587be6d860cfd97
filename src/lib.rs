//! Public Suffix List lookups for Rust
//!
//! This library splits domain names at their public suffix, the part under
//! which anyone can register names (`com`, `co.uk`), to find the registrable
//! domain used for cookie scoping and same-site checks:
//! - Parsing of the list format (normal, wildcard and exception rules)
//! - ICANN and private domain sections
//! - Longest-match rule selection with exception override
//! - Cookie-jar adapter returning only the public suffix
//! - LRU caching of rule lookups
//!
//! # Example
//!
//! ```rust
//! use publicsuffix_r::{domain, parse_domain, FindOptions, List, ParserOptions};
//!
//! let list_text = "
//! // ===BEGIN ICANN DOMAINS===
//! uk
//! co.uk
//! *.kawasaki.jp
//! !city.kawasaki.jp
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.com
//! ";
//!
//! // Parse the list
//! let list = List::parse(list_text, &ParserOptions::default());
//!
//! // Registrable domain
//! let registrable = domain(&list, "www.example.co.uk", &FindOptions::default()).unwrap();
//! assert_eq!(registrable, "example.co.uk");
//!
//! // Full decomposition
//! let name = parse_domain(&list, "www.city.kawasaki.jp", &FindOptions::default()).unwrap();
//! assert_eq!(name.tld, "kawasaki.jp");
//! assert_eq!(name.sld, "city");
//! assert_eq!(name.trd, "www");
//! ```
//!
//! # List Syntax
//!
//! One rule per line, surrounding whitespace ignored:
//!
//! | Line | Kind | Description |
//! |------|------|-------------|
//! | `co.uk` | Normal | The labels are a public suffix |
//! | `*.ck` | Wildcard | Any label under `ck` is a public suffix |
//! | `!www.ck` | Exception | `www.ck` is registrable despite `*.ck` |
//! | `// ...` | Comment | Ignored |
//! | `// ===BEGIN PRIVATE DOMAINS===` | Marker | Following rules are private |
//!
//! ## Rule Selection
//!
//! - A matching exception rule always wins
//! - Otherwise the rule with the most labels wins
//! - Without a matching rule, `*` applies: the last label is the suffix

#[cfg(feature = "bundled")]
pub mod bundled;
pub mod cache;
pub mod cookie;
pub mod domain;
pub mod error;
pub mod list;
pub mod parser;
pub mod rule;
pub mod types;

// Re-export commonly used items
pub use cache::{CachedList, DEFAULT_CACHE_SIZE};
pub use cookie::{CookieJarList, PublicSuffixList};
pub use domain::{domain, normalize, parse_domain, public_suffix};
pub use error::{InvalidNameKind, PslError, Result};
pub use list::{List, SuffixFinder};
pub use parser::{parse_rules, parse_rules_from_reader, COMMENT_TOKEN, PRIVATE_DOMAINS_MARKER};
pub use rule::{labels, Rule, RuleKind, DEFAULT_RULE};
pub use types::{DomainName, FindOptions, ParserOptions};
