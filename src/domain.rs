//! Domain name parsing against a suffix list.

use crate::error::{InvalidNameKind, PslError, Result};
use crate::list::SuffixFinder;
use crate::types::{DomainName, FindOptions};

/// Lowercase the name and reject blank or dot-prefixed names.
pub fn normalize(name: &str) -> Result<String> {
    let name = name.to_lowercase();

    if name.is_empty() {
        return Err(PslError::invalid_name(InvalidNameKind::Blank, name));
    }
    if name.starts_with('.') {
        return Err(PslError::invalid_name(InvalidNameKind::LeadingDot, name));
    }

    Ok(name)
}

/// Decompose the name into suffix, registrable label and subdomain.
///
/// ```
/// use publicsuffix_r::{parse_domain, FindOptions, List, ParserOptions};
///
/// let list = List::parse("uk\nco.uk\n", &ParserOptions::default());
/// let name = parse_domain(&list, "www.example.co.uk", &FindOptions::default()).unwrap();
/// assert_eq!(name.tld, "co.uk");
/// assert_eq!(name.sld, "example");
/// assert_eq!(name.trd, "www");
/// ```
pub fn parse_domain<F>(finder: &F, name: &str, options: &FindOptions) -> Result<DomainName>
where
    F: SuffixFinder + ?Sized,
{
    let name = normalize(name)?;
    let rule = finder.find_rule(&name, options);

    let Some((remainder, tld)) = rule.decompose(&name).filter(|(_, tld)| !tld.is_empty()) else {
        return Err(PslError::NameIsSuffix(name.clone()));
    };
    let (sld, trd) = split_remainder(remainder);

    Ok(DomainName {
        tld: tld.to_string(),
        sld: sld.to_string(),
        trd: trd.to_string(),
        rule: rule.into_owned(),
    })
}

/// Registrable domain of the name: the suffix plus one label.
pub fn domain<F>(finder: &F, name: &str, options: &FindOptions) -> Result<String>
where
    F: SuffixFinder + ?Sized,
{
    parse_domain(finder, name, options).map(|dn| dn.registrable())
}

/// Public suffix of the name, or an empty string.
///
/// The name is used as given, without normalization, and errors are
/// swallowed.
pub fn public_suffix<F>(finder: &F, name: &str) -> String
where
    F: SuffixFinder + ?Sized,
{
    let rule = finder.find_rule(name, &FindOptions::default());
    rule.decompose(name)
        .map(|(_, suffix)| suffix.to_string())
        .unwrap_or_default()
}

/// Split the non-suffix labels into `(sld, trd)` at the last dot.
fn split_remainder(remainder: &str) -> (&str, &str) {
    match remainder.rsplit_once('.') {
        Some((trd, sld)) => (sld, trd),
        None => (remainder, ""),
    }
}
