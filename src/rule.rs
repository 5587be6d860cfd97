//! Suffix rules.
//!
//! A rule is one line of a public suffix list, classified by its marker:
//!
//! | Source | Kind | Value | Length |
//! |--------|------|-------|--------|
//! | `co.uk` | Normal | `co.uk` | 2 |
//! | `*.ck` | Wildcard | `ck` | 2 |
//! | `*` | Wildcard | (empty) | 1 |
//! | `!www.ck` | Exception | `www.ck` | 1 |
//!
//! The length is the precedence metric used by [`List::find`](crate::List::find).

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Fallback rule used when no rule of a list matches a name.
///
/// Equivalent to the source line `*`: the last label of the name is its suffix.
pub static DEFAULT_RULE: Lazy<Rule> = Lazy::new(|| Rule::new("*"));

/// Rule kind, taken from the marker at the start of the source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Plain label sequence: `co.uk`
    Normal,
    /// Leading `*.` label: `*.kawasaki.jp`
    Wildcard,
    /// Leading `!`, carves a name out of a wildcard: `!city.kawasaki.jp`
    Exception,
}

/// A single parsed public suffix rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rule {
    kind: RuleKind,
    value: String,
    length: usize,
    private: bool,
}

impl Rule {
    /// Parse a rule from a trimmed, non-comment source line.
    ///
    /// An empty line yields a normal rule with an empty value.
    pub fn new(content: &str) -> Self {
        let (kind, value) = if let Some(rest) = content.strip_prefix('*') {
            // "*" has no value; otherwise drop the "." that follows the marker
            let mut chars = rest.chars();
            chars.next();
            (RuleKind::Wildcard, chars.as_str())
        } else if let Some(rest) = content.strip_prefix('!') {
            (RuleKind::Exception, rest)
        } else {
            (RuleKind::Normal, content)
        };

        let count = label_count(value);
        let length = match kind {
            RuleKind::Normal => count,
            RuleKind::Wildcard => count + 1,
            RuleKind::Exception => count.saturating_sub(1),
        };

        Self {
            kind,
            value: value.to_string(),
            length,
            private: false,
        }
    }

    /// Mark the rule as coming from the private domains section.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Rule labels without the type marker.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of labels the rule contributes to a match.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Check if the rule matches the name.
    ///
    /// The rule value must be a suffix of the name that ends on a label
    /// boundary: `uk` matches `co.uk` but not `fuk`. A wildcard needs at
    /// least one more label than its value.
    pub fn matches(&self, name: &str) -> bool {
        let Some(left) = name.strip_suffix(self.value.as_str()) else {
            return false;
        };

        if left.is_empty() {
            return self.kind != RuleKind::Wildcard;
        }

        left.ends_with('.')
    }

    /// Split the name into `(remainder, suffix)` according to this rule.
    ///
    /// The suffix is made of the rule's literal labels, preceded by the one
    /// label consumed by a wildcard. An exception keeps its first label out of
    /// the suffix. The remainder holds every label before the suffix and must
    /// not be empty.
    ///
    /// Returns `None` when the name has no labels left over for the
    /// remainder, i.e. the name is itself a suffix under this rule.
    pub fn decompose<'n>(&self, name: &'n str) -> Option<(&'n str, &'n str)> {
        let mut literal = self.parts();
        let wildcard = match self.kind {
            RuleKind::Wildcard => 1,
            RuleKind::Normal | RuleKind::Exception => {
                // no literal labels still anchors an (empty) label at the end
                if literal.is_empty() {
                    literal.push("");
                }
                0
            }
        };
        let suffix_labels = literal.len() + wildcard;

        let name_labels = labels(name);
        if name_labels.len() <= suffix_labels {
            return None;
        }
        if name_labels[name_labels.len() - literal.len()..] != literal[..] {
            return None;
        }

        let suffix_len = name_labels[name_labels.len() - suffix_labels..]
            .iter()
            .map(|label| label.len())
            .sum::<usize>()
            + suffix_labels
            - 1;
        let start = name.len() - suffix_len;

        // name[start - 1] is the dot between remainder and suffix
        let remainder = &name[..start - 1];
        if remainder.is_empty() {
            return None;
        }

        Some((remainder, &name[start..]))
    }

    /// Literal labels that must close the name.
    fn parts(&self) -> Vec<&str> {
        match self.kind {
            RuleKind::Normal => labels(&self.value),
            RuleKind::Wildcard if self.value.is_empty() => Vec::new(),
            RuleKind::Wildcard => labels(&self.value),
            RuleKind::Exception => labels(&self.value).into_iter().skip(1).collect(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Normal => f.write_str(&self.value),
            RuleKind::Wildcard if self.value.is_empty() => f.write_str("*"),
            RuleKind::Wildcard => write!(f, "*.{}", self.value),
            RuleKind::Exception => write!(f, "!{}", self.value),
        }
    }
}

/// Split a domain name into its dot-separated labels.
pub fn labels(name: &str) -> Vec<&str> {
    name.split('.').collect()
}

fn label_count(value: &str) -> usize {
    if value.is_empty() {
        0
    } else {
        value.split('.').count()
    }
}
