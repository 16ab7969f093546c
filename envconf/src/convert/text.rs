//! Conversion capability for custom field types

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

use super::scalar::Scalar;
use crate::error::TextError;

/// A field type that converts itself from and to a single text value.
///
/// Any field whose type is not a built-in scalar, `Vec<u8>` or a list is
/// loaded through this trait. The loader passes the raw value unmodified
/// and performs no interpretation of its own.
///
/// # Example
///
/// ```
/// use envconf::{TextError, TextValue};
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Level {
///     #[default]
///     Info,
///     Debug,
/// }
///
/// impl TextValue for Level {
///     fn parse_text(raw: &str) -> Result<Self, TextError> {
///         match raw {
///             "info" => Ok(Level::Info),
///             "debug" => Ok(Level::Debug),
///             other => Err(TextError::new(format!("unknown level {:?}", other))),
///         }
///     }
///
///     fn render_text(&self) -> Option<String> {
///         match self {
///             Level::Info => None,
///             Level::Debug => Some("debug".to_string()),
///         }
///     }
/// }
/// ```
pub trait TextValue: Sized {
    /// Parses the raw value.
    fn parse_text(raw: &str) -> Result<Self, TextError>;

    /// Renders the current value for descriptions.
    ///
    /// Return `None` for the zero value or when the type has no textual
    /// form. A rendered value must parse back into an equal value.
    fn render_text(&self) -> Option<String> {
        None
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                fn parse_text(raw: &str) -> Result<Self, TextError> {
                    raw.parse().map_err(TextError::new)
                }

                fn render_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_from_str!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

// Lets aliases of scalar types (`type Port = u16;`) load as custom fields.
macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextValue for $ty {
                fn parse_text(raw: &str) -> Result<Self, TextError> {
                    Self::parse_scalar(raw).map_err(TextError::new)
                }

                fn render_text(&self) -> Option<String> {
                    super::render_scalar(self)
                }
            }
        )*
    };
}

impl_scalar!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl TextValue for PathBuf {
    fn parse_text(raw: &str) -> Result<Self, TextError> {
        Ok(PathBuf::from(raw))
    }

    fn render_text(&self) -> Option<String> {
        if self.as_os_str().is_empty() {
            return None;
        }
        Some(self.to_string_lossy().into_owned())
    }
}

impl TextValue for char {
    fn parse_text(raw: &str) -> Result<Self, TextError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(TextError::new(format!(
                "expected a single character, got {:?}",
                raw
            ))),
        }
    }

    fn render_text(&self) -> Option<String> {
        (*self != '\0').then(|| self.to_string())
    }
}
