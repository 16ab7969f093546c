//! Built-in scalar conversions

use crate::error::ConvertError;
use crate::kind::ScalarKind;

/// A built-in single-value kind.
///
/// Implemented for `bool`, every integer width, `f32`, `f64` and `String`.
pub trait Scalar: Sized {
    /// Descriptor for this type.
    const KIND: ScalarKind;

    /// Converts a raw value.
    fn parse_scalar(raw: &str) -> Result<Self, ConvertError>;

    /// Natural textual form, accepted back by [`Scalar::parse_scalar`].
    fn render_scalar(&self) -> String;

    /// Whether this is the type's zero value.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_int {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn parse_scalar(raw: &str) -> Result<Self, ConvertError> {
                    raw.parse().map_err(|source| ConvertError::InvalidInt {
                        kind: Self::KIND,
                        raw: raw.to_string(),
                        source,
                    })
                }

                fn render_scalar(&self) -> String {
                    self.to_string()
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn parse_scalar(raw: &str) -> Result<Self, ConvertError> {
                    raw.parse().map_err(|source| ConvertError::InvalidFloat {
                        kind: Self::KIND,
                        raw: raw.to_string(),
                        source,
                    })
                }

                fn render_scalar(&self) -> String {
                    self.to_string()
                }

                // -0.0 is not the zero value
                fn is_zero(&self) -> bool {
                    self.to_bits() == 0
                }
            }
        )*
    };
}

impl_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
}

impl_float! {
    f32 => F32,
    f64 => F64,
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn parse_scalar(raw: &str) -> Result<Self, ConvertError> {
        match raw {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
            _ => Err(ConvertError::InvalidBool {
                raw: raw.to_string(),
            }),
        }
    }

    fn render_scalar(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn parse_scalar(raw: &str) -> Result<Self, ConvertError> {
        Ok(raw.to_string())
    }

    fn render_scalar(&self) -> String {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
