//! String to value conversion.
//!
//! These functions are the dispatch targets of `#[derive(Envconf)]`. Each
//! field kind has a parse function used when loading and a render function
//! used when describing. Render functions return `None` for zero values.

mod scalar;
mod text;

pub use scalar::*;
pub use text::*;

use crate::error::ConvertError;

/// Converts a built-in scalar.
pub fn scalar<T: Scalar>(raw: &str) -> Result<T, ConvertError> {
    T::parse_scalar(raw)
}

/// Takes the raw value's bytes unmodified.
pub fn bytes(raw: &str) -> Result<Vec<u8>, ConvertError> {
    Ok(raw.as_bytes().to_vec())
}

/// Converts a comma-separated list of scalars.
///
/// Pieces are trimmed before conversion. A value without a comma is a
/// single element list, and the empty string is a single empty piece.
pub fn list<T: Scalar>(raw: &str) -> Result<Vec<T>, ConvertError> {
    split(raw)
        .enumerate()
        .map(|(index, piece)| T::parse_scalar(piece).map_err(|e| ConvertError::element(index, e)))
        .collect()
}

/// Converts a custom type through its [`TextValue`] impl.
pub fn text<T: TextValue>(raw: &str) -> Result<T, ConvertError> {
    Ok(T::parse_text(raw)?)
}

/// Converts a comma-separated list of custom values.
pub fn text_list<T: TextValue>(raw: &str) -> Result<Vec<T>, ConvertError> {
    split(raw)
        .enumerate()
        .map(|(index, piece)| {
            T::parse_text(piece).map_err(|e| ConvertError::element(index, e.into()))
        })
        .collect()
}

fn split(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim)
}

/// Renders a scalar.
pub fn render_scalar<T: Scalar>(value: &T) -> Option<String> {
    if value.is_zero() {
        return None;
    }
    Some(value.render_scalar())
}

/// Renders raw bytes as UTF-8.
///
/// Bytes that are not valid UTF-8 have no textual form and render as `None`.
pub fn render_bytes(value: &[u8]) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    String::from_utf8(value.to_vec()).ok()
}

/// Renders a list of scalars joined with `,`.
///
/// Returns `None` when an element would not survive splitting, i.e. it
/// contains a `,` or surrounding whitespace.
pub fn render_list<T: Scalar>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    join(values.iter().map(|value| Some(value.render_scalar())))
}

/// Renders a custom value.
pub fn render_text<T: TextValue>(value: &T) -> Option<String> {
    value.render_text()
}

/// Renders a list of custom values joined with `,`.
///
/// The list has no textual form if any element renders `None` or would not
/// survive splitting.
pub fn render_text_list<T: TextValue>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    join(values.iter().map(TextValue::render_text))
}

fn join(pieces: impl Iterator<Item = Option<String>>) -> Option<String> {
    let pieces = pieces
        .map(|piece| piece.filter(|p| !p.contains(',') && p.trim() == p.as_str()))
        .collect::<Option<Vec<_>>>()?;
    Some(pieces.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_of_strings() {
        assert_eq!(list::<String>("foo,bar"), Ok(vec!["foo".to_string(), "bar".to_string()]));
        assert_eq!(list::<String>("xx yy"), Ok(vec!["xx yy".to_string()]));
    }

    #[test]
    fn test_list_trims_pieces() {
        assert_eq!(list::<f32>("11.32, 44, 12"), Ok(vec![11.32, 44.0, 12.0]));
        assert_eq!(list::<String>(" a ,b "), Ok(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_list_of_bools() {
        assert_eq!(list::<bool>("0,t,true,false"), Ok(vec![false, true, true, false]));
        assert_eq!(list::<bool>("f"), Ok(vec![false]));
    }

    #[test]
    fn test_empty_list_value() {
        assert_eq!(list::<String>(""), Ok(vec![String::new()]));
        assert!(list::<i32>("").is_err());
    }

    #[test]
    fn test_list_element_error_carries_index() {
        let err = list::<i32>("1,2,x").unwrap_err();
        let ConvertError::InvalidElement { index, source } = err else {
            panic!("expected element error, got {:?}", err);
        };
        assert_eq!(index, 2);
        assert!(matches!(*source, ConvertError::InvalidInt { .. }));
    }

    #[test]
    fn test_bytes_are_unmodified() {
        assert_eq!(bytes(" foo,bar "), Ok(b" foo,bar ".to_vec()));
    }

    #[test]
    fn test_text_list() {
        let addrs = text_list::<std::net::Ipv4Addr>("10.0.0.1, 10.0.0.2").unwrap();
        assert_eq!(addrs.len(), 2);
        assert_eq!(
            render_text_list(&addrs).as_deref(),
            Some("10.0.0.1,10.0.0.2")
        );
        assert!(matches!(
            text_list::<std::net::Ipv4Addr>("10.0.0.1,nope"),
            Err(ConvertError::InvalidElement { index: 1, .. })
        ));
    }

    #[test]
    fn test_text_list_without_textual_form() {
        #[derive(Debug, PartialEq)]
        struct Opaque(u8);

        impl TextValue for Opaque {
            fn parse_text(raw: &str) -> Result<Self, crate::TextError> {
                raw.parse().map(Opaque).map_err(crate::TextError::new)
            }

            fn render_text(&self) -> Option<String> {
                (self.0 != 0).then(|| self.0.to_string())
            }
        }

        assert_eq!(render_text_list(&[Opaque(0), Opaque(7)]), None);
        assert_eq!(render_text_list(&[Opaque(3), Opaque(7)]).as_deref(), Some("3,7"));
    }

    #[test]
    fn test_render_list_skips_unsplittable_elements() {
        assert_eq!(render_list(&[" a".to_string(), "b".to_string()]), None);
        assert_eq!(render_list(&["a".to_string(), "b,c".to_string()]), None);
        assert_eq!(render_list(&[String::new(), "b".to_string()]).as_deref(), Some(",b"));
        assert_eq!(
            render_list(&["a b".to_string(), "c".to_string()]).as_deref(),
            Some("a b,c")
        );
    }

    #[test]
    fn test_render_bytes_requires_utf8() {
        assert_eq!(render_bytes(&[0xff, 0x41]), None);
        let rendered = render_bytes(b" foo,bar ").unwrap();
        assert_eq!(bytes(&rendered), Ok(b" foo,bar ".to_vec()));
    }

    #[test]
    fn test_render_omits_zero_values() {
        assert_eq!(render_scalar(&0i32), None);
        assert_eq!(render_scalar(&String::new()), None);
        assert_eq!(render_bytes(&[]), None);
        assert_eq!(render_list::<i16>(&[]), None);
        assert_eq!(render_scalar(&32i32).as_deref(), Some("32"));
    }

    #[test]
    fn test_render_list_round_trips() {
        let values = vec![1i16, -2, 3];
        let rendered = render_list(&values).unwrap();
        assert_eq!(rendered, "1,-2,3");
        assert_eq!(list::<i16>(&rendered), Ok(values));
    }
}
