//! Helper functions for dynamic crate path resolution using proc_macro_crate

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path to the crate exporting `Inject`.
///
/// Prefers a direct dependency on `reinhardt-graph` and falls back to the
/// `reinhardt-wiring` facade, which re-exports it.
pub(crate) fn get_reinhardt_graph_crate() -> syn::Result<TokenStream> {
	use proc_macro_crate::{FoundCrate, crate_name};

	for (package, itself) in [
		("reinhardt-graph", quote!(::reinhardt_graph)),
		("reinhardt-wiring", quote!(::reinhardt_wiring)),
	] {
		match crate_name(package) {
			Ok(FoundCrate::Itself) => return Ok(itself),
			Ok(FoundCrate::Name(name)) => {
				let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
				return Ok(quote!(::#ident));
			}
			Err(_) => continue,
		}
	}

	Err(syn::Error::new(
		proc_macro2::Span::call_site(),
		"failed to resolve `reinhardt-graph` crate. Ensure `reinhardt-graph` or `reinhardt-wiring` is listed in Cargo.toml dependencies.",
	))
}
