mod macros;

use proc_macro::TokenStream;

/// Derives `envconf::Envconf` for a struct with named fields.
///
/// Each field may carry one annotation, `#[envconf("key,option,...")]` or
/// `#[envconf = "key,option,..."]`. A non-empty key replaces the key derived
/// from the field name; the `required` option makes the key mandatory.
///
/// ```ignore
/// #[derive(Default, Envconf)]
/// struct Config {
///     #[envconf("listen,required")]
///     addr: std::net::SocketAddr,
///     workers: usize,
///     #[envconf(",required")]
///     peers: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Envconf, attributes(envconf))]
pub fn derive_envconf(input: TokenStream) -> TokenStream {
    macros::envconf::expand(input.into()).into()
}
