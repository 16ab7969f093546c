//! Field registration and key resolution

use crate::describe::Description;
use crate::error::{ConvertError, ParseErrors};
use crate::key::derive_key;
use crate::kind::Kind;
use crate::source::{Environment, Source};
use crate::tag::Tag;

/// Static description of one destination field.
///
/// Built by `#[derive(Envconf)]`; one entry per named field, in declaration
/// order.
pub struct Field<T> {
    /// Declared field name.
    pub name: &'static str,
    /// Raw annotation, e.g. `"key,required"`.
    pub tag: Option<&'static str>,
    /// Declared kind.
    pub kind: Kind,
    /// Converts a raw value and stores it in the field.
    pub load: fn(&mut T, &str) -> Result<(), ConvertError>,
    /// Renders the field's current value, `None` when it is the zero value.
    pub render: fn(&T) -> Option<String>,
}

impl<T> Field<T> {
    /// Resolves the key and options for this field.
    pub fn spec(&self) -> FieldSpec {
        let tag = Tag::parse(self.tag);
        let key = match tag.key {
            Some(key) => key.to_string(),
            None => derive_key(self.name),
        };

        FieldSpec {
            name: self.name,
            kind: self.kind,
            key,
            required: tag.required,
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A field with its lookup key resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared field name.
    pub name: &'static str,
    /// Declared kind.
    pub kind: Kind,
    /// Key looked up in the source.
    pub key: String,
    /// The key must be present in the source.
    pub required: bool,
}

/// A record that can be loaded from a string mapping.
///
/// Implement with `#[derive(Envconf)]`. The field table is static, so
/// destination types cannot borrow.
///
/// ```
/// use std::collections::HashMap;
/// use envconf::Envconf;
///
/// #[derive(Debug, Default, Envconf)]
/// struct Settings {
///     #[envconf("http_port,required")]
///     port: u16,
///     hosts: Vec<String>,
/// }
///
/// let source = HashMap::from([
///     ("http_port", "8080"),
///     ("HOSTS", "a.example, b.example"),
/// ]);
/// let settings = Settings::from_source(&source).unwrap();
/// assert_eq!(settings.port, 8080);
/// assert_eq!(settings.hosts, vec!["a.example", "b.example"]);
/// ```
pub trait Envconf: Sized + 'static {
    /// Every field, in declaration order.
    const FIELDS: &'static [Field<Self>];

    /// Loads fields present in `source` into `self`.
    fn load_from<S: Source + ?Sized>(&mut self, source: &S) -> Result<(), ParseErrors> {
        crate::load(self, source)
    }

    /// Builds a value from its defaults and `source`.
    fn from_source<S: Source + ?Sized>(source: &S) -> Result<Self, ParseErrors>
    where
        Self: Default,
    {
        let mut dest = Self::default();
        dest.load_from(source)?;
        Ok(dest)
    }

    /// Builds a value from its defaults and the process environment.
    fn from_env() -> Result<Self, ParseErrors>
    where
        Self: Default,
    {
        Self::from_source(&Environment::capture())
    }

    /// Describes every field with the current values as defaults.
    fn describe(&self) -> Description {
        crate::describe(self)
    }

    /// Every resolved key, in declaration order.
    fn keys() -> Vec<String> {
        Self::FIELDS.iter().map(|field| field.spec().key).collect()
    }
}
