//! Procedural macros for Reinhardt graph wiring
//!
//! This crate provides:
//! - `#[injectable]` - Derive the `Inject` annotation from an annotated constructor

use proc_macro::TokenStream;
use syn::{ItemImpl, parse_macro_input};

mod crate_paths;
mod injectable;
mod utils;

/// Derive `Inject` for a type from its `#[inject]` constructor
///
/// # Example
///
/// ```ignore
/// use reinhardt_graph::injectable;
/// use std::sync::Arc;
///
/// struct Database {
///     config: Arc<Config>,
/// }
///
/// #[injectable]
/// impl Database {
///     #[inject]
///     fn new(config: Arc<Config>, #[assisted] name: String) -> Self {
///         Self { config }
///     }
/// }
/// ```
///
/// # Attributes
///
/// - `#[inject]` - Marks the constructor; exactly one per impl block
/// - `#[assisted]` - Marks a constructor argument supplied by the caller
///
/// Every other argument must be an `Arc<T>`. Tuples, arrays and slices are
/// rejected, the constructor must return `Self`, and it may take at most 12
/// arguments.
#[proc_macro_attribute]
pub fn injectable(args: TokenStream, input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as ItemImpl);

	injectable::injectable_impl(args.into(), input)
		.unwrap_or_else(|e| e.to_compile_error())
		.into()
}
