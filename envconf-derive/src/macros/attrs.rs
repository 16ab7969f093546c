//! `#[envconf(...)]` field annotations.

use syn::{Attribute, Expr, Lit, LitStr, Meta};

/// Returns the annotation string of a field, if it has one.
///
/// Accepts `#[envconf("...")]` and `#[envconf = "..."]`. More than one
/// annotation on the same field is an error.
pub fn field_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident("envconf") {
            continue;
        }

        let tag = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(lit) => lit.clone(),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "expected a string literal, e.g. #[envconf = \"key,required\"]",
                        ));
                    }
                },
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal, e.g. #[envconf = \"key,required\"]",
                    ));
                }
            },
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected #[envconf(\"key,options\")]",
                ));
            }
        };

        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[envconf] annotation",
            ));
        }
        found = Some(tag);
    }

    Ok(found)
}
