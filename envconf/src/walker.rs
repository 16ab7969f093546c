//! Field iteration shared by loading and describing.

use crate::describe::DescriptorRow;
use crate::error::ParseError;
use crate::field::{Envconf, Field, FieldSpec};
use crate::source::Source;

/// Every field of `T` with its key resolved, in declaration order.
pub fn fields<T: Envconf>() -> impl Iterator<Item = (&'static Field<T>, FieldSpec)> {
    T::FIELDS.iter().map(|field| (field, field.spec()))
}

/// Loads every field found in `source`, collecting failures.
///
/// Absent optional fields keep their current value. A present key is
/// always converted, even when its value is empty.
pub(crate) fn load_fields<T, S>(dest: &mut T, source: &S) -> Vec<ParseError>
where
    T: Envconf,
    S: Source + ?Sized,
{
    let mut errors = Vec::new();

    for (field, spec) in fields::<T>() {
        let Some(raw) = source.get(&spec.key) else {
            if spec.required {
                log::debug!("{}: required key {} is missing", spec.name, spec.key);
                errors.push(ParseError::missing(spec.name, spec.key));
            } else {
                log::trace!("{}: {} not set, keeping current value", spec.name, spec.key);
            }
            continue;
        };

        match (field.load)(dest, raw) {
            Ok(()) => log::debug!("{}: loaded from {}", spec.name, spec.key),
            Err(e) => {
                log::debug!("{}: invalid value for {}: {}", spec.name, spec.key, e);
                errors.push(ParseError::invalid(spec.name, spec.key, e));
            }
        }
    }

    errors
}

/// Describes every field using its current value as the default.
pub(crate) fn describe_fields<T: Envconf>(dest: &T) -> Vec<DescriptorRow> {
    fields::<T>()
        .map(|(field, spec)| DescriptorRow {
            key: spec.key,
            kind: spec.kind,
            default: (field.render)(dest),
            required: spec.required,
        })
        .collect()
}
