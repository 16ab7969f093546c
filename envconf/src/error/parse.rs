//! Per-field load failures

use std::fmt;
use std::ops::Deref;

use super::ConvertError;

/// Closed set of per-field failure reasons.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A required field's key is absent from the source.
    #[error("missing")]
    Missing,

    /// The value could not be converted into the field's kind.
    #[error("invalid value: {0}")]
    InvalidValue(#[source] ConvertError),
}

/// A single field that failed to load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} ({key}): {kind}")]
pub struct ParseError {
    /// Declared field name.
    pub field: &'static str,
    /// Resolved lookup key.
    pub key: String,
    /// Failure reason.
    #[source]
    pub kind: ErrorKind,
}

impl ParseError {
    /// Creates a missing required field error.
    pub fn missing(field: &'static str, key: impl Into<String>) -> Self {
        Self {
            field,
            key: key.into(),
            kind: ErrorKind::Missing,
        }
    }

    /// Creates an invalid value error.
    pub fn invalid(field: &'static str, key: impl Into<String>, source: ConvertError) -> Self {
        Self {
            field,
            key: key.into(),
            kind: ErrorKind::InvalidValue(source),
        }
    }
}

/// Every field that failed during one load, in declaration order.
///
/// Never empty when returned from a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    pub(crate) fn new(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }

    /// Consumes the aggregate, returning the individual errors.
    pub fn into_vec(self) -> Vec<ParseError> {
        self.0
    }
}

impl Deref for ParseErrors {
    type Target = [ParseError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
