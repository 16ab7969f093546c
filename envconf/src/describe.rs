//! Human readable field descriptions

use std::fmt;

use crate::field::Envconf;
use crate::kind::Kind;
use crate::walker::describe_fields;

/// Describes every field of `dest`, using its current values as defaults.
///
/// Only the destination's shape and current values are read; no source is
/// consulted and no validation happens.
pub fn describe<T: Envconf>(dest: &T) -> Description {
    Description {
        rows: describe_fields(dest),
    }
}

/// One described field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorRow {
    /// Resolved lookup key.
    pub key: String,
    /// Declared kind.
    pub kind: Kind,
    /// Rendered current value, `None` for zero values.
    pub default: Option<String>,
    /// The key must be present in the source.
    pub required: bool,
}

impl DescriptorRow {
    /// Human label of the declared kind, e.g. `i32` or `string list`.
    pub fn label(&self) -> String {
        self.kind.to_string()
    }
}

/// Rows for every field of a record, in declaration order.
///
/// Displays as an aligned table: key, type, then the quoted default or a
/// `(required)` marker when there is no default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    rows: Vec<DescriptorRow>,
}

impl Description {
    /// Rows in field declaration order.
    pub fn rows(&self) -> &[DescriptorRow] {
        &self.rows
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for Description {
    type Item = DescriptorRow;
    type IntoIter = std::vec::IntoIter<DescriptorRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Description {
    type Item = &'a DescriptorRow;
    type IntoIter = std::slice::Iter<'a, DescriptorRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.rows.iter().map(DescriptorRow::label).collect();
        let key_width = self
            .rows
            .iter()
            .map(|row| row.key.chars().count())
            .max()
            .unwrap_or(0);
        let label_width = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        for (i, (row, label)) in self.rows.iter().zip(&labels).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let note = match (&row.default, row.required) {
                (Some(default), _) => format!("{:?}", default),
                (None, true) => "(required)".to_string(),
                (None, false) => String::new(),
            };
            let line = format!(
                "{:<key_width$}  {:<label_width$}  {}",
                row.key,
                label,
                note,
                key_width = key_width,
                label_width = label_width,
            );
            f.write_str(line.trim_end())?;
        }

        Ok(())
    }
}
