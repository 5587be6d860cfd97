//! Public suffix list source format.

use std::convert::Infallible;
use std::io::BufRead;

use tracing::trace;

use crate::error::Result;
use crate::rule::Rule;
use crate::types::ParserOptions;

/// Marker line that opens the private domains section.
pub const PRIVATE_DOMAINS_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";

/// Comment token, only recognized at the start of a line.
pub const COMMENT_TOKEN: &str = "//";

/// Line-by-line classifier for public suffix list sources.
///
/// Tracks the section state, so lines must be fed in source order.
#[derive(Debug, Clone)]
pub struct LineScanner {
    options: ParserOptions,
    private: bool,
    stopped: bool,
}

impl LineScanner {
    /// Create a scanner positioned before the first line.
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            options: *options,
            private: false,
            stopped: false,
        }
    }

    /// Classify one source line, returning the rule it declares, if any.
    pub fn scan_line(&mut self, line: &str) -> Option<Rule> {
        if self.stopped {
            return None;
        }

        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            return None;
        }

        // The marker sits inside a comment, check it first
        if line.contains(PRIVATE_DOMAINS_MARKER) {
            if !self.options.private_domains {
                trace!("private domains excluded, stopping at section marker");
                self.stopped = true;
                return None;
            }
            self.private = true;
            return None;
        }

        if line.starts_with(COMMENT_TOKEN) {
            return None;
        }

        Some(Rule::new(line).with_private(self.private))
    }

    /// True once the scanner ignores every further line.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// True once the private domains marker has been seen.
    pub fn in_private_section(&self) -> bool {
        self.private
    }
}

/// Parse list rules from text.
pub fn parse_rules(text: &str, options: &ParserOptions) -> Vec<Rule> {
    let mut rules = Vec::new();
    let lines = text.lines().map(Ok::<_, Infallible>);
    parse_rules_inner(lines, options, &mut rules).unwrap_or_else(|never| match never {});
    rules
}

/// Parse list rules from a buffered reader.
pub fn parse_rules_from_reader<R: BufRead>(
    reader: R,
    options: &ParserOptions,
) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    parse_rules_inner(reader.lines(), options, &mut rules)?;
    Ok(rules)
}

/// Scan source lines in order, appending each declared rule to `rules`.
///
/// Stops at the first line error, leaving the rules scanned so far in place.
pub(crate) fn parse_rules_inner<I, S, E>(
    lines: I,
    options: &ParserOptions,
    rules: &mut Vec<Rule>,
) -> std::result::Result<(), E>
where
    I: IntoIterator<Item = std::result::Result<S, E>>,
    S: AsRef<str>,
{
    let mut scanner = LineScanner::new(options);

    for line in lines {
        if let Some(rule) = scanner.scan_line(line?.as_ref()) {
            rules.push(rule);
        }
        if scanner.is_stopped() {
            break;
        }
    }

    Ok(())
}
