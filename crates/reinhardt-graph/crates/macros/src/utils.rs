//! Type inspection helpers shared by the macros

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, GenericArgument, PathArguments, Result, Type};

/// `#[injectable]` takes no arguments.
pub(crate) fn ensure_no_args(args: TokenStream) -> Result<()> {
	if args.is_empty() {
		return Ok(());
	}
	Err(syn::Error::new_spanned(
		args,
		"unknown argument: #[injectable] does not take arguments",
	))
}

pub(crate) fn has_attr(attrs: &[Attribute], name: &str) -> bool {
	attrs.iter().any(|attr| attr.path().is_ident(name))
}

pub(crate) fn strip_attr(attrs: &mut Vec<Attribute>, name: &str) {
	attrs.retain(|attr| !attr.path().is_ident(name));
}

/// Element type of `Arc<T>` (any path ending in `Arc`).
pub(crate) fn arc_inner(ty: &Type) -> Option<&Type> {
	let Type::Path(type_path) = ty else {
		return None;
	};
	if type_path.qself.is_some() {
		return None;
	}
	let segment = type_path.path.segments.last()?;
	if segment.ident != "Arc" {
		return None;
	}
	let PathArguments::AngleBracketed(args) = &segment.arguments else {
		return None;
	};
	match args.args.first() {
		Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
		_ => None,
	}
}

/// Tuples, arrays, slices and slice references are collections of types,
/// which cannot stand for a single component.
pub(crate) fn is_bare_collection(ty: &Type) -> bool {
	match ty {
		Type::Tuple(_) | Type::Array(_) | Type::Slice(_) => true,
		Type::Reference(reference) => matches!(*reference.elem, Type::Slice(_)),
		Type::Paren(paren) => is_bare_collection(&paren.elem),
		Type::Group(group) => is_bare_collection(&group.elem),
		_ => arc_inner(ty).is_some_and(is_bare_collection),
	}
}

pub(crate) fn type_string(ty: &impl ToTokens) -> String {
	ty.to_token_stream().to_string().replace(' ', "")
}
