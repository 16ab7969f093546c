//! Loading entry point

use crate::error::ParseErrors;
use crate::field::Envconf;
use crate::source::Source;
use crate::walker::load_fields;

/// Populates `dest` from `source`.
///
/// Every field is visited even after a failure, so the returned error lists
/// all missing and invalid fields at once. Fields whose key is absent and
/// not required keep their current value. On failure, fields that did
/// convert have already been written.
pub fn load<T, S>(dest: &mut T, source: &S) -> Result<(), ParseErrors>
where
    T: Envconf,
    S: Source + ?Sized,
{
    let errors = load_fields(dest, source);
    if errors.is_empty() {
        return Ok(());
    }

    log::debug!("load failed for {} field(s)", errors.len());
    Err(ParseErrors::new(errors))
}
