//! Implementation of the `#[injectable]` macro

use crate::crate_paths::get_reinhardt_graph_crate;
use crate::utils::{arc_inner, ensure_no_args, has_attr, is_bare_collection, strip_attr, type_string};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, Result, ReturnType, Type};

/// Arguments `Inject::Args` can hold.
const MAX_ARGS: usize = 12;

enum ConstructorArg {
	Injected(Type),
	Assisted(Type),
}

/// Implementation of the `#[injectable]` attribute macro
///
/// This macro:
/// 1. Finds the single `#[inject]` constructor of the impl block
/// 2. Checks its shape, result type and arguments
/// 3. Implements `Inject` by forwarding to the constructor
pub fn injectable_impl(args: TokenStream, mut input: ItemImpl) -> Result<TokenStream> {
	ensure_no_args(args)?;

	if let Some((_, path, _)) = &input.trait_ {
		return Err(syn::Error::new_spanned(
			path,
			"#[injectable] can only be applied to inherent impl blocks",
		));
	}

	let constructor = find_constructor(&input)?;
	let args = check_constructor(&input.self_ty, constructor)?;
	let ctor_name = constructor.sig.ident.clone();

	strip_helper_attrs(&mut input);

	let krate = get_reinhardt_graph_crate()?;
	let self_ty = &input.self_ty;
	let (impl_generics, _, where_clause) = input.generics.split_for_impl();

	let arg_idents: Vec<_> = (0..args.len()).map(|i| format_ident!("__arg{}", i)).collect();
	let arg_types = args.iter().map(|arg| match arg {
		ConstructorArg::Injected(ty) => quote!(#ty),
		ConstructorArg::Assisted(ty) => quote!(#krate::Assisted<#ty>),
	});
	let call_args = args.iter().zip(&arg_idents).map(|(arg, ident)| match arg {
		ConstructorArg::Injected(_) => quote!(#ident),
		ConstructorArg::Assisted(_) => quote!(#ident.0),
	});

	let expanded = quote! {
		#input

		impl #impl_generics #krate::Inject for #self_ty #where_clause {
			type Args = (#(#arg_types,)*);

			fn construct((#(#arg_idents,)*): Self::Args) -> Self {
				<#self_ty>::#ctor_name(#(#call_args),*)
			}
		}
	};

	Ok(expanded)
}

fn find_constructor(input: &ItemImpl) -> Result<&ImplItemFn> {
	let mut constructors = input.items.iter().filter_map(|item| match item {
		ImplItem::Fn(method) if has_attr(&method.attrs, "inject") => Some(method),
		_ => None,
	});

	let Some(constructor) = constructors.next() else {
		return Err(syn::Error::new_spanned(
			&input.self_ty,
			"#[injectable] requires exactly one constructor marked with #[inject]",
		));
	};
	if let Some(extra) = constructors.next() {
		return Err(syn::Error::new_spanned(
			&extra.sig.ident,
			"only one constructor can be marked with #[inject]",
		));
	}
	Ok(constructor)
}

/// Checks shape, then result type, then constructibility.
fn check_constructor(self_ty: &Type, constructor: &ImplItemFn) -> Result<Vec<ConstructorArg>> {
	let sig = &constructor.sig;
	let self_name = type_string(self_ty);

	if let Some(receiver) = sig.receiver() {
		return Err(syn::Error::new_spanned(
			receiver,
			"an #[inject] constructor cannot take `self`",
		));
	}
	if let Some(asyncness) = &sig.asyncness {
		return Err(syn::Error::new_spanned(
			asyncness,
			"an #[inject] constructor cannot be async",
		));
	}
	if !sig.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&sig.generics,
			"an #[inject] constructor cannot be generic",
		));
	}

	// Shape
	let typed_args: Vec<_> = sig
		.inputs
		.iter()
		.filter_map(|input| match input {
			FnArg::Typed(pat_type) => Some(pat_type),
			FnArg::Receiver(_) => None,
		})
		.collect();
	for pat_type in &typed_args {
		if is_bare_collection(&pat_type.ty) {
			return Err(syn::Error::new_spanned(
				&pat_type.ty,
				format!(
					"`{}` is a collection of types and cannot be an argument of an #[inject] constructor. Wrap it in a dedicated type.",
					type_string(&pat_type.ty)
				),
			));
		}
	}
	if let ReturnType::Type(_, ty) = &sig.output
		&& is_bare_collection(ty)
	{
		return Err(syn::Error::new_spanned(
			ty,
			"the result of an #[inject] constructor cannot be a collection of types",
		));
	}

	// Result type
	let returns_self = match &sig.output {
		ReturnType::Type(_, ty) => {
			matches!(&**ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("Self"))
				|| type_string(ty) == self_name
		}
		ReturnType::Default => false,
	};
	if !returns_self {
		let declared = match &sig.output {
			ReturnType::Type(_, ty) => type_string(ty),
			ReturnType::Default => "()".to_string(),
		};
		return Err(syn::Error::new_spanned(
			&sig.output,
			format!(
				"the #[inject] constructor of `{}` returns `{}`, but it must return `Self`. Maybe the annotation was taken from another type by mistake?",
				self_name, declared
			),
		));
	}

	// Constructibility
	if typed_args.len() > MAX_ARGS {
		return Err(syn::Error::new_spanned(
			&sig.inputs,
			format!(
				"an #[inject] constructor can take at most {} arguments",
				MAX_ARGS
			),
		));
	}
	typed_args
		.into_iter()
		.map(|pat_type| {
			let ty = (*pat_type.ty).clone();
			if has_attr(&pat_type.attrs, "assisted") {
				Ok(ConstructorArg::Assisted(ty))
			} else if arc_inner(&ty).is_some() {
				Ok(ConstructorArg::Injected(ty))
			} else {
				Err(syn::Error::new_spanned(
					&pat_type.ty,
					format!(
						"`{}` is not constructible from argument type `{}`: injected arguments must be `Arc<T>`, or be marked #[assisted]",
						self_name,
						type_string(&pat_type.ty)
					),
				))
			}
		})
		.collect()
}

fn strip_helper_attrs(input: &mut ItemImpl) {
	for item in &mut input.items {
		if let ImplItem::Fn(method) = item
			&& has_attr(&method.attrs, "inject")
		{
			strip_attr(&mut method.attrs, "inject");
			for arg in &mut method.sig.inputs {
				if let FnArg::Typed(pat_type) = arg {
					strip_attr(&mut pat_type.attrs, "assisted");
				}
			}
		}
	}
}
