//! Type-level lists of components
//!
//! An injector declares the types it provides as a tuple, e.g.
//! `Injector<(Config, Database)>`. [`TypeList`] lowers such a tuple to
//! [`TypeKey`]s for the assembly phase, and [`Provides`] answers "is `T` a
//! member of this list?" during type checking, so asking an injector for a
//! type it does not declare is a compile error rather than a runtime one.

use crate::key::TypeKey;

/// A tuple of component types.
pub trait TypeList: 'static {
	/// Descriptors of the members, in declaration order.
	fn keys() -> Vec<TypeKey>;
}

impl TypeList for () {
	fn keys() -> Vec<TypeKey> {
		Vec::new()
	}
}

/// Position marker used to select the tuple element that equals `T`.
///
/// Callers never name it; it is always inferred (`get::<T, _>()`).
pub struct Index<const N: usize>;

/// Membership of `T` in a type list.
///
/// Implemented for every tuple position, so `(A, B): Provides<B, Index<1>>`
/// holds while `(A, B): Provides<C, _>` has no implementation.
#[diagnostic::on_unimplemented(
	message = "`{T}` is not provided by this injector",
	label = "trying to get an instance of `{T}`, but it is not provided by this injector",
	note = "add `{T}` to the injector's provided types `{Self}`"
)]
pub trait Provides<T, I>: TypeList {}

macro_rules! impl_provides_at {
	($target:ident @ $idx:literal; [$($name:ident),+]) => {
		impl<$($name: 'static),+> Provides<$target, Index<$idx>> for ($($name,)+) {}
	};
}

macro_rules! tuple_impls {
	($($name:ident @ $idx:literal),+) => {
		impl<$($name: 'static),+> TypeList for ($($name,)+) {
			fn keys() -> Vec<TypeKey> {
				vec![$(TypeKey::of::<$name>()),+]
			}
		}

		tuple_impls!(@provides [$($name),+] $($name @ $idx),+);
	};
	(@provides $names:tt $($target:ident @ $idx:literal),+) => {
		$(impl_provides_at!($target @ $idx; $names);)+
	};
}

tuple_impls!(A @ 0);
tuple_impls!(A @ 0, B @ 1);
tuple_impls!(A @ 0, B @ 1, C @ 2);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, J @ 8);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, J @ 8, K @ 9);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, J @ 8, K @ 9, L @ 10);
tuple_impls!(A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, J @ 8, K @ 9, L @ 10, M @ 11);
