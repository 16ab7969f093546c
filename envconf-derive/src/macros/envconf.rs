use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, parse_quote, parse2};

use super::attrs::field_tag;
use super::field_type::{FieldType, classify};

/// Derive macro for the Envconf trait.
///
/// Generates a constant field table with one entry per named field. Field
/// types are classified here, so a type with no conversion fails to compile
/// instead of failing at load time.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    match expand_struct(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand_struct(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "#[derive(Envconf)] requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Envconf)] only supports structs",
            ));
        }
    };

    let mut entries = Vec::new();
    let mut errors: Option<syn::Error> = None;

    for field in fields {
        match field_entry(field) {
            Ok(entry) => entries.push(entry),
            Err(e) => match &mut errors {
                Some(existing) => existing.combine(e),
                None => errors = Some(e),
            },
        }
    }
    if let Some(errors) = errors {
        return Err(errors);
    }

    let generics = static_generics(&input.generics)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envconf::Envconf for #name #ty_generics #where_clause {
            const FIELDS: &'static [::envconf::Field<Self>] = &[
                #(#entries),*
            ];
        }
    })
}

fn field_entry(field: &syn::Field) -> syn::Result<TokenStream> {
    let Some(ident) = &field.ident else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let name = ident.unraw().to_string();

    let tag = match field_tag(&field.attrs)? {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    };

    let (kind, parse, render) = match classify(&field.ty)? {
        FieldType::Scalar(ty) => (
            quote! { ::envconf::Kind::Scalar(<#ty as ::envconf::Scalar>::KIND) },
            quote! { scalar },
            quote! { render_scalar },
        ),
        FieldType::Bytes => (
            quote! { ::envconf::Kind::Bytes },
            quote! { bytes },
            quote! { render_bytes },
        ),
        FieldType::List(element) => (
            quote! {
                ::envconf::Kind::List(&::envconf::Kind::Scalar(
                    <#element as ::envconf::Scalar>::KIND,
                ))
            },
            quote! { list },
            quote! { render_list },
        ),
        FieldType::Custom(label) => (
            quote! { ::envconf::Kind::Custom(#label) },
            quote! { text },
            quote! { render_text },
        ),
        FieldType::CustomList(label) => (
            quote! { ::envconf::Kind::List(&::envconf::Kind::Custom(#label)) },
            quote! { text_list },
            quote! { render_text_list },
        ),
    };

    Ok(quote! {
        ::envconf::Field::<Self> {
            name: #name,
            tag: #tag,
            kind: #kind,
            load: |dest, raw| {
                dest.#ident = ::envconf::convert::#parse(raw)?;
                ::core::result::Result::Ok(())
            },
            render: |dest| ::envconf::convert::#render(&dest.#ident),
        }
    })
}

/// The field table is `'static`, so every type parameter must be too.
fn static_generics(generics: &Generics) -> syn::Result<Generics> {
    let mut generics = generics.clone();

    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "#[derive(Envconf)] does not support borrowed fields",
        ));
    }

    let params: Vec<_> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            _ => None,
        })
        .collect();

    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause.predicates.push(parse_quote!(#param: 'static));
    }

    Ok(generics)
}
