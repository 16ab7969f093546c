//! Typed configuration records loaded from flat string mappings
//!
//! Derive [`Envconf`] on a struct with named fields, then load it from any
//! [`Source`] of string keys and values, such as a captured process
//! environment or a `HashMap`.
//!
//! ```
//! use std::collections::HashMap;
//! use envconf::Envconf;
//!
//! #[derive(Debug, Default, Envconf)]
//! struct Config {
//!     max_conns: u32,
//!     #[envconf("db_url,required")]
//!     database: String,
//!     tags: Vec<String>,
//! }
//!
//! let source = HashMap::from([
//!     ("MAX_CONNS", "16"),
//!     ("db_url", "postgres://localhost/app"),
//!     ("TAGS", "blue, green"),
//! ]);
//!
//! let mut config = Config::default();
//! envconf::load(&mut config, &source).unwrap();
//! assert_eq!(config.max_conns, 16);
//! assert_eq!(config.tags, vec!["blue", "green"]);
//!
//! print!("{}", envconf::describe(&config));
//! ```
//!
//! # Keys
//!
//! A field's key is derived from its name by splitting it into words,
//! upper-casing them and joining with `_` (`max_conns` and `MaxConns` both
//! become `MAX_CONNS`). `#[envconf("key")]` replaces it verbatim.
//!
//! # Options
//!
//! Options follow the key, comma-separated: `#[envconf(",required")]`
//! keeps the derived key and fails the load when the key is absent. A key
//! present with an empty value counts as set.
//!
//! # Field types
//!
//! | Type | Conversion |
//! |------|------------|
//! | `bool` | `1 t T true True TRUE` / `0 f F false False FALSE` |
//! | integers, `f32`, `f64` | decimal, range-checked |
//! | `String` | the raw value |
//! | `Vec<u8>` | the raw value's bytes |
//! | `Vec<T>` | comma-separated, trimmed, each converted as `T` |
//! | anything else | [`TextValue`] |
//!
//! Types are matched by name, so an alias such as `type Port = u16;` is
//! loaded through the [`TextValue`] impl of the aliased scalar and described
//! as `Port`.

pub mod convert;
pub mod error;

mod describe;
mod field;
mod key;
mod kind;
mod load;
mod source;
mod tag;
mod walker;

pub use convert::{Scalar, TextValue};
pub use describe::*;
pub use error::*;
pub use field::*;
pub use key::derive_key;
pub use kind::*;
pub use load::*;
pub use source::*;
pub use tag::Tag;
pub use walker::fields;

pub use envconf_derive::Envconf;
