//! Constructor signatures and their introspection.
//!
//! A component declares how it is built by implementing [`Inject`], usually
//! through the `#[injectable]` attribute. The declaration is a
//! [`Signature`] `C(Args...)`: the component type and the argument types its
//! constructor takes. Arguments wrapped in [`Assisted`] are supplied by the
//! caller and never become requirements of the graph.

use crate::algebra;
use crate::error::{GraphError, GraphResult};
use crate::key::{TypeKey, join_names};
use crate::resolver::{Resolver, downcast_instance};
use std::fmt;
use std::sync::Arc;

/// A single argument of a constructor signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureArg {
	/// Resolved from the graph.
	Injected(TypeKey),
	/// Supplied by the caller.
	Assisted(TypeKey),
}

impl SignatureArg {
	/// The argument type with the assisted marker stripped.
	pub fn key(&self) -> TypeKey {
		match self {
			Self::Injected(key) | Self::Assisted(key) => *key,
		}
	}

	pub fn is_assisted(&self) -> bool {
		matches!(self, Self::Assisted(_))
	}
}

/// A constructor signature `result(args...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
	result: TypeKey,
	args: Vec<SignatureArg>,
}

impl Signature {
	pub fn new(result: TypeKey, args: Vec<SignatureArg>) -> Self {
		Self { result, args }
	}

	pub fn result(&self) -> TypeKey {
		self.result
	}

	pub fn args(&self) -> &[SignatureArg] {
		&self.args
	}

	/// Rejects type-level lists in result or argument position.
	pub fn validate(&self) -> GraphResult<()> {
		if self.result.is_list() {
			return Err(GraphError::InvalidSignature {
				type_name: self.result.name().to_string(),
				position: "result",
			});
		}
		if let Some(arg) = self.args.iter().find(|arg| arg.key().is_list()) {
			return Err(GraphError::InvalidSignature {
				type_name: arg.key().name().to_string(),
				position: "argument",
			});
		}
		Ok(())
	}

	/// All argument types in declaration order, assisted markers removed.
	pub fn unlabeled_args(&self) -> Vec<TypeKey> {
		self.args.iter().map(SignatureArg::key).collect()
	}

	/// Argument types the graph has to provide.
	pub fn requirements(&self) -> Vec<TypeKey> {
		algebra::dedup(
			self.args
				.iter()
				.filter(|arg| !arg.is_assisted())
				.map(SignatureArg::key),
		)
	}
}

impl fmt::Display for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.result)?;
		for (i, arg) in self.args.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			match arg {
				SignatureArg::Injected(key) => write!(f, "{}", key)?,
				SignatureArg::Assisted(key) => write!(f, "Assisted<{}>", key)?,
			}
		}
		f.write_str(")")
	}
}

/// Marks a constructor argument as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assisted<T>(pub T);

/// A constructor argument type.
pub trait Arg: Sized + Send + 'static {
	fn signature_arg() -> SignatureArg;

	fn resolve(resolver: &dyn Resolver) -> GraphResult<Self>;
}

impl<T: Send + Sync + 'static> Arg for Arc<T> {
	fn signature_arg() -> SignatureArg {
		SignatureArg::Injected(TypeKey::of::<T>())
	}

	fn resolve(resolver: &dyn Resolver) -> GraphResult<Self> {
		let key = TypeKey::of::<T>();
		downcast_instance(resolver.resolve(key)?, key)
	}
}

impl<T: Send + 'static> Arg for Assisted<T> {
	fn signature_arg() -> SignatureArg {
		SignatureArg::Assisted(TypeKey::of::<T>())
	}

	fn resolve(_resolver: &dyn Resolver) -> GraphResult<Self> {
		Err(GraphError::AssistedArgument {
			type_name: std::any::type_name::<T>().to_string(),
		})
	}
}

/// A tuple of constructor arguments.
pub trait ArgList: Sized + Send + 'static {
	fn signature_args() -> Vec<SignatureArg>;

	fn resolve_all(resolver: &dyn Resolver) -> GraphResult<Self>;
}

macro_rules! arg_list_impls {
	($($name:ident),*) => {
		impl<$($name: Arg),*> ArgList for ($($name,)*) {
			fn signature_args() -> Vec<SignatureArg> {
				vec![$($name::signature_arg()),*]
			}

			#[allow(unused_variables)]
			fn resolve_all(resolver: &dyn Resolver) -> GraphResult<Self> {
				Ok(($($name::resolve(resolver)?,)*))
			}
		}
	};
}

arg_list_impls!();
arg_list_impls!(A);
arg_list_impls!(A, B);
arg_list_impls!(A, B, C);
arg_list_impls!(A, B, C, D);
arg_list_impls!(A, B, C, D, E);
arg_list_impls!(A, B, C, D, E, F);
arg_list_impls!(A, B, C, D, E, F, G);
arg_list_impls!(A, B, C, D, E, F, G, H);
arg_list_impls!(A, B, C, D, E, F, G, H, J);
arg_list_impls!(A, B, C, D, E, F, G, H, J, K);
arg_list_impls!(A, B, C, D, E, F, G, H, J, K, L);
arg_list_impls!(A, B, C, D, E, F, G, H, J, K, L, M);

/// Inject annotation of a component: `Self(Args...)`.
///
/// Usually derived with `#[injectable]`:
///
/// ```
/// use reinhardt_graph::{Inject, injectable};
/// use std::sync::Arc;
///
/// struct Config;
/// struct Database {
///     config: Arc<Config>,
/// }
///
/// #[injectable]
/// impl Database {
///     #[inject]
///     fn new(config: Arc<Config>) -> Self {
///         Self { config }
///     }
/// }
///
/// assert_eq!(Database::signature().args().len(), 1);
/// ```
///
/// A collection of types is not a component:
///
/// ```compile_fail
/// use reinhardt_graph::injectable;
/// use std::sync::Arc;
///
/// struct Left;
/// struct Right;
/// struct Pair;
///
/// #[injectable]
/// impl Pair {
///     #[inject]
///     fn new(parts: Arc<(Left, Right)>) -> Self {
///         Pair
///     }
/// }
/// ```
///
/// The annotation has to describe its own type:
///
/// ```compile_fail
/// use reinhardt_graph::injectable;
///
/// struct Database;
/// struct Cache;
///
/// #[injectable]
/// impl Cache {
///     #[inject]
///     fn new() -> Database {
///         Database
///     }
/// }
/// ```
///
/// Injected arguments are shared handles:
///
/// ```compile_fail
/// use reinhardt_graph::injectable;
///
/// struct Config;
/// struct Database;
///
/// #[injectable]
/// impl Database {
///     #[inject]
///     fn new(config: Config) -> Self {
///         Database
///     }
/// }
/// ```
pub trait Inject: Sized + Send + Sync + 'static {
	/// Constructor arguments.
	type Args: ArgList;

	/// The declared signature. Defaults to `Self(Args...)`.
	fn signature() -> Signature {
		Signature::new(TypeKey::of::<Self>(), Self::Args::signature_args())
	}

	fn construct(args: Self::Args) -> Self;
}

/// Result of a successful introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introspected {
	pub signature: Signature,
	/// Argument types with assisted markers stripped.
	pub args: Vec<TypeKey>,
}

/// Reads and checks the inject annotation of `C`.
///
/// Shape is checked first, then that the annotation describes `C` itself,
/// then that `C` is constructible from the declared arguments. Nothing is
/// returned unless all three hold.
pub fn introspect<C: Inject>() -> GraphResult<Introspected> {
	let signature = C::signature();
	signature.validate()?;

	let owner = TypeKey::of::<C>();
	if signature.result() != owner {
		return Err(GraphError::AnnotationMismatch {
			owner: owner.name().to_string(),
			declared: signature.result().name().to_string(),
		});
	}

	let declared = signature.unlabeled_args();
	let expected: Vec<TypeKey> = C::Args::signature_args()
		.iter()
		.map(SignatureArg::key)
		.collect();
	if declared != expected {
		return Err(GraphError::NotConstructible {
			type_name: owner.name().to_string(),
			declared: join_names(&declared),
			expected: join_names(&expected),
		});
	}

	tracing::trace!(signature = %signature, "introspected inject annotation");
	Ok(Introspected {
		signature,
		args: declared,
	})
}
