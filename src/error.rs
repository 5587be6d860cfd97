use std::fmt;

use thiserror::Error;

/// Classifies rejected input names for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNameKind {
    /// The name is empty
    Blank,
    /// The name starts with a dot
    LeadingDot,
}

impl fmt::Display for InvalidNameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidNameKind::Blank => f.write_str("name is blank"),
            InvalidNameKind::LeadingDot => f.write_str("name starts with a dot"),
        }
    }
}

/// Public suffix lookup error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Invalid name {name:?}: {kind}")]
    InvalidName { kind: InvalidNameKind, name: String },

    #[error("{0} is a suffix")]
    NameIsSuffix(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PslError {
    pub(crate) fn invalid_name(kind: InvalidNameKind, name: impl Into<String>) -> Self {
        PslError::InvalidName {
            kind,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PslError>;
