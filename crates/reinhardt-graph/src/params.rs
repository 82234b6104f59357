//! Parameters of a module: single types and whole injectors.

use crate::key::TypeKey;
use crate::type_list::TypeList;

/// One parameter of a module.
///
/// A parent injector used as a parameter stands for every type it provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
	Type(TypeKey),
	Injector(Vec<TypeKey>),
}

impl Param {
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self::Type(TypeKey::of::<T>())
	}

	/// An injector providing the members of `P`.
	pub fn injector<P: TypeList>() -> Self {
		Self::Injector(P::keys())
	}
}

/// Replaces each injector parameter in place by the types it provides.
///
/// # Examples
///
/// ```
/// use reinhardt_graph::{Param, TypeKey, expand_injectors_in_params};
///
/// struct R;
/// struct P;
/// struct Q;
/// struct S;
///
/// let params = [Param::of::<R>(), Param::injector::<(P, Q)>(), Param::of::<S>()];
///
/// assert_eq!(
///     expand_injectors_in_params(&params),
///     vec![TypeKey::of::<R>(), TypeKey::of::<P>(), TypeKey::of::<Q>(), TypeKey::of::<S>()],
/// );
/// ```
pub fn expand_injectors_in_params(params: &[Param]) -> Vec<TypeKey> {
	params
		.iter()
		.flat_map(|param| match param {
			Param::Type(key) => std::slice::from_ref(key),
			Param::Injector(keys) => keys.as_slice(),
		})
		.copied()
		.collect()
}
