//! Syntactic classification of field types.

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Built-in scalar types, matched on the last path segment.
const SCALAR_TYPES: &[&str] = &[
    "bool", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128",
    "usize", "f32", "f64", "String",
];

/// Wrappers and collections that cannot be loaded from a single value.
const UNSUPPORTED_TYPES: &[&str] = &[
    "Option", "Box", "Rc", "Arc", "Cell", "RefCell", "Mutex", "RwLock", "HashMap", "BTreeMap",
    "HashSet", "BTreeSet", "VecDeque",
];

/// How a field is converted.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// Built-in scalar.
    Scalar(Type),
    /// `Vec<u8>`.
    Bytes,
    /// `Vec<S>` of a built-in scalar.
    List(Type),
    /// Any other type, converted through `TextValue`. Carries its label.
    Custom(String),
    /// `Vec<C>` of a custom type.
    CustomList(String),
}

/// Classifies a field type, rejecting types that have no conversion.
pub fn classify(ty: &Type) -> syn::Result<FieldType> {
    let path = type_path(ty)?;
    let Some(segment) = path.path.segments.last() else {
        return Err(unsupported(ty, "empty type path"));
    };
    let ident = segment.ident.to_string();

    if SCALAR_TYPES.contains(&ident.as_str()) && segment.arguments.is_empty() {
        return Ok(FieldType::Scalar(ty.clone()));
    }

    if UNSUPPORTED_TYPES.contains(&ident.as_str()) {
        return Err(unsupported(
            ty,
            &format!("`{}` fields cannot be loaded from a single value", ident),
        ));
    }

    if ident == "Vec" {
        let element = vec_element(ty, &segment.arguments)?;
        return match classify(element)? {
            FieldType::Scalar(element) if is_u8(&element) => Ok(FieldType::Bytes),
            FieldType::Scalar(element) => Ok(FieldType::List(element)),
            FieldType::Custom(label) => Ok(FieldType::CustomList(label)),
            FieldType::Bytes | FieldType::List(_) | FieldType::CustomList(_) => {
                Err(unsupported(ty, "nested lists are not supported"))
            }
        };
    }

    Ok(FieldType::Custom(ident))
}

fn type_path(ty: &Type) -> syn::Result<&TypePath> {
    match ty {
        Type::Path(path) if path.qself.is_none() => Ok(path),
        Type::Group(group) => type_path(&group.elem),
        Type::Paren(paren) => type_path(&paren.elem),
        Type::Reference(_) => Err(unsupported(ty, "references are not supported")),
        Type::Ptr(_) => Err(unsupported(ty, "pointers are not supported")),
        _ => Err(unsupported(ty, "unsupported field type")),
    }
}

fn vec_element<'a>(ty: &Type, arguments: &'a PathArguments) -> syn::Result<&'a Type> {
    if let PathArguments::AngleBracketed(args) = arguments
        && args.args.len() == 1
        && let Some(GenericArgument::Type(element)) = args.args.first()
    {
        return Ok(element);
    }
    Err(unsupported(ty, "expected `Vec<T>`"))
}

fn is_u8(ty: &Type) -> bool {
    type_path(ty)
        .ok()
        .and_then(|path| path.path.segments.last())
        .is_some_and(|segment| segment.ident == "u8")
}

fn unsupported(ty: &Type, message: &str) -> syn::Error {
    syn::Error::new_spanned(ty, message)
}
