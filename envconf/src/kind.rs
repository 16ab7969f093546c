//! Field type descriptors

use std::fmt;

/// Built-in single-value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
}

impl ScalarKind {
    /// Human label used in descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The declared kind of a destination field.
///
/// Lists hold a reference to their element kind so descriptors can live in
/// constant field tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A built-in scalar.
    Scalar(ScalarKind),
    /// Raw bytes (`Vec<u8>`), taken from the value unmodified.
    Bytes,
    /// Comma-separated list of the element kind.
    List(&'static Kind),
    /// A type converted through its own [`TextValue`](crate::TextValue) impl.
    Custom(&'static str),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{}", scalar),
            Self::Bytes => f.write_str("bytes"),
            Self::List(element) => write!(f, "{} list", element),
            Self::Custom(name) => f.write_str(name),
        }
    }
}
