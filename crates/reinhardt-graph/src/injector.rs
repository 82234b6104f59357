//! Injector front end
//!
//! An [`Injector<P>`] wraps an assembled module whose provided types include
//! every member of the tuple `P` and which requires nothing. Asking it for a
//! type outside `P` does not compile:
//!
//! ```compile_fail
//! use reinhardt_graph::{Injector, ModuleBuilder};
//!
//! struct X;
//!
//! let module = ModuleBuilder::new().bind_instance(X).build().unwrap();
//! let injector: Injector<(X,)> = Injector::new(module).unwrap();
//!
//! // An injector is never one of its own provided types.
//! let _ = injector.get::<Injector<(X,)>, _>();
//! ```

use crate::algebra;
use crate::error::{GraphError, GraphResult};
use crate::key::{TypeKey, join_names};
use crate::module::AssembledModule;
use crate::params::Param;
use crate::resolver::{Resolver, downcast_instance};
use crate::type_list::{Provides, TypeList};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Typed handle over an assembled module providing `P`.
///
/// Cloning shares the module; it is released with the last handle.
pub struct Injector<P: TypeList> {
	module: Arc<AssembledModule>,
	_provides: PhantomData<fn() -> P>,
}

impl<P: TypeList> Injector<P> {
	/// Shares an already shared module.
	pub fn from_shared(module: Arc<AssembledModule>) -> GraphResult<Self> {
		verify::<P>(&module)?;
		let injector = Self {
			module,
			_provides: PhantomData,
		};
		if injector.module.settings().eager_singletons {
			injector.eagerly_inject_all()?;
		}
		tracing::debug!(
			provides = %join_names(&P::keys()),
			"created injector"
		);
		Ok(injector)
	}

	/// Takes ownership of `module`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_graph::{Injector, ModuleBuilder};
	/// use std::sync::Arc;
	///
	/// struct Greeting(&'static str);
	///
	/// let module = ModuleBuilder::new().bind_instance(Greeting("hello")).build().unwrap();
	/// let injector: Injector<(Greeting,)> = Injector::new(module).unwrap();
	///
	/// let greeting: Arc<Greeting> = injector.get().unwrap();
	/// assert_eq!(greeting.0, "hello");
	/// ```
	pub fn new(module: AssembledModule) -> GraphResult<Self> {
		Self::from_shared(Arc::new(module))
	}

	/// Works on an independent copy of `module`.
	///
	/// Singletons constructed through this injector are not visible to
	/// `module`, and the other way around.
	pub fn from_module(module: &AssembledModule) -> GraphResult<Self> {
		Self::from_shared(Arc::new(module.clone()))
	}

	/// Returns the instance of `T`.
	///
	/// Only compiles if `T` is one of the types in `P`. The index `I` is
	/// always inferred.
	pub fn get<T, I>(&self) -> GraphResult<Arc<T>>
	where
		T: Send + Sync + 'static,
		P: Provides<T, I>,
	{
		let key = TypeKey::of::<T>();
		downcast_instance(self.module.resolve(key)?, key)
	}

	/// Descriptors of `P`, in declaration order.
	pub fn provided_types(&self) -> Vec<TypeKey> {
		P::keys()
	}

	/// This injector as a parameter of another module.
	pub fn as_param(&self) -> Param {
		Param::injector::<P>()
	}

	pub fn module(&self) -> &Arc<AssembledModule> {
		&self.module
	}

	/// Constructs every singleton of the module.
	pub fn eagerly_inject_all(&self) -> GraphResult<()> {
		self.module.eagerly_inject_all()
	}
}

fn verify<P: TypeList>(module: &AssembledModule) -> GraphResult<()> {
	if !module.required().is_empty() {
		return Err(GraphError::UnresolvedRequirements {
			types: join_names(module.required()),
		});
	}

	let missing = algebra::set_difference(&P::keys(), module.provided());
	if let Some(key) = missing.first() {
		return Err(GraphError::NotProvided {
			type_name: key.name().to_string(),
		});
	}
	Ok(())
}

impl<P: TypeList> Clone for Injector<P> {
	fn clone(&self) -> Self {
		Self {
			module: Arc::clone(&self.module),
			_provides: PhantomData,
		}
	}
}

impl<P: TypeList> fmt::Debug for Injector<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Injector")
			.field("provides", &P::keys())
			.field("module", &self.module)
			.finish()
	}
}
