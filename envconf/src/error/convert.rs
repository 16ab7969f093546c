//! Conversion failure reasons

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use crate::kind::ScalarKind;

/// Why a raw string could not be converted into a field's kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Not a base-10 integer, or out of range for the destination width.
    #[error("invalid {kind} {raw:?}: {source}")]
    InvalidInt {
        kind: ScalarKind,
        raw: String,
        source: ParseIntError,
    },

    /// Not a floating point literal.
    #[error("invalid {kind} {raw:?}: {source}")]
    InvalidFloat {
        kind: ScalarKind,
        raw: String,
        source: ParseFloatError,
    },

    /// Not one of the accepted boolean literals.
    #[error("invalid bool {raw:?}")]
    InvalidBool { raw: String },

    /// A list element failed to convert.
    #[error("element {index}: {source}")]
    InvalidElement {
        /// Zero-based position of the element.
        index: usize,
        source: Box<ConvertError>,
    },

    /// A custom type rejected the value.
    #[error(transparent)]
    Text(#[from] TextError),
}

impl ConvertError {
    /// Wraps an element failure with its list position.
    pub fn element(index: usize, source: ConvertError) -> Self {
        Self::InvalidElement {
            index,
            source: Box::new(source),
        }
    }
}

/// Failure reported by a [`TextValue`](crate::TextValue) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TextError {
    message: String,
}

impl TextError {
    /// Creates a new error from any displayable reason.
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// The failure reason.
    pub fn message(&self) -> &str {
        &self.message
    }
}
