//! Public suffix list.
//!
//! A [`List`] is an ordered sequence of [`Rule`]s. Lookups are a sequential
//! scan; insertion order decides ties between rules of equal length.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::parser::{parse_rules, parse_rules_inner};
use crate::rule::{Rule, RuleKind, DEFAULT_RULE};
use crate::types::{FindOptions, ParserOptions};

/// Trait for selecting the rule that governs a domain name
pub trait SuffixFinder: Send + Sync {
    /// Find the most appropriate rule for the name.
    fn find_rule(&self, name: &str, options: &FindOptions) -> Cow<'_, Rule>;
}

/// A public suffix list.
#[derive(Debug, Clone, Default)]
pub struct List {
    rules: Vec<Rule>,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from the text of a list source.
    pub fn parse(src: &str, options: &ParserOptions) -> Self {
        let mut list = Self::new();
        list.load_str(src, options);
        list
    }

    /// Create a list from a reader over a list source.
    pub fn from_reader<R: BufRead>(reader: R, options: &ParserOptions) -> Result<Self> {
        let mut list = Self::new();
        list.load_reader(reader, options)?;
        Ok(list)
    }

    /// Create a list from a list file.
    pub fn from_file(path: impl AsRef<Path>, options: &ParserOptions) -> Result<Self> {
        let mut list = Self::new();
        list.load_file(path, options)?;
        Ok(list)
    }

    /// Append the rules of a list source, returning the rules added.
    pub fn load_str(&mut self, src: &str, options: &ParserOptions) -> Vec<Rule> {
        let start = self.rules.len();
        self.rules.extend(parse_rules(src, options));
        self.loaded(start)
    }

    /// Append the rules read from a reader, returning the rules added.
    ///
    /// On a read error, the rules read before the failure stay in the list.
    pub fn load_reader<R: BufRead>(
        &mut self,
        reader: R,
        options: &ParserOptions,
    ) -> Result<Vec<Rule>> {
        let start = self.rules.len();
        parse_rules_inner(reader.lines(), options, &mut self.rules)?;
        Ok(self.loaded(start))
    }

    /// Append the rules of a list file, returning the rules added.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        options: &ParserOptions,
    ) -> Result<Vec<Rule>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading public suffix list");
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file), options)
    }

    fn loaded(&self, start: usize) -> Vec<Rule> {
        let added = &self.rules[start..];
        debug!(
            rules = added.len(),
            private = added.iter().filter(|r| r.is_private()).count(),
            total = self.rules.len(),
            "loaded public suffix rules"
        );
        added.to_vec()
    }

    /// Add a rule at the end of the list.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Get the number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate the rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Find the rule that governs the name.
    ///
    /// The first matching exception wins outright. Otherwise the longest
    /// matching rule wins, and the earliest one among equally long rules.
    /// With no match, the result is [`DEFAULT_RULE`].
    pub fn find(&self, name: &str, options: &FindOptions) -> &Rule {
        let mut best: Option<&Rule> = None;
        let candidates = self
            .rules
            .iter()
            .filter(|rule| rule.matches(name))
            .filter(|rule| !(options.ignore_private && rule.is_private()));

        for rule in candidates {
            if rule.kind() == RuleKind::Exception {
                return rule;
            }
            if best.map_or(true, |b| b.length() < rule.length()) {
                best = Some(rule);
            }
        }

        best.unwrap_or(&*DEFAULT_RULE)
    }
}

impl SuffixFinder for List {
    fn find_rule(&self, name: &str, options: &FindOptions) -> Cow<'_, Rule> {
        Cow::Borrowed(self.find(name, options))
    }
}

impl FromIterator<Rule> for List {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
