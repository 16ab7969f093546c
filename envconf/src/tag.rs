//! Field annotation parsing.

/// Parsed form of a field annotation such as `"key,required"`.
///
/// The first comma-separated component is an explicit lookup key; every
/// following component is an option. Unknown options are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Explicit lookup key, used verbatim when present.
    pub key: Option<&'a str>,
    /// The field must be present in the source.
    pub required: bool,
}

impl<'a> Tag<'a> {
    /// Parses an annotation. `None` yields the empty tag.
    pub fn parse(raw: Option<&'a str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let mut parts = raw.split(',');
        let key = parts.next().filter(|key| !key.is_empty());
        let mut tag = Self {
            key,
            required: false,
        };

        for option in parts {
            match option.trim() {
                "required" => tag.required = true,
                other => log::trace!("ignoring unknown field option {:?}", other),
            }
        }

        tag
    }
}
