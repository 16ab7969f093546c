//! Error types

mod convert;
mod parse;

pub use convert::*;
pub use parse::*;
