//! Runtime lookup seam between constructors and assembled modules.

use crate::error::{GraphError, GraphResult};
use crate::key::TypeKey;
use std::any::Any;
use std::sync::Arc;

/// Type-erased component instance.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Something that can produce instances by descriptor.
///
/// Implemented by [`AssembledModule`](crate::AssembledModule); factories of
/// bindings receive a `&dyn Resolver` to look up their requirements.
pub trait Resolver {
	fn resolve(&self, key: TypeKey) -> GraphResult<Instance>;
}

/// Recovers the concrete type of an instance resolved for `key`.
pub fn downcast_instance<T: Send + Sync + 'static>(
	instance: Instance,
	key: TypeKey,
) -> GraphResult<Arc<T>> {
	instance.downcast::<T>().map_err(|_| GraphError::TypeMismatch {
		type_name: key.name().to_string(),
	})
}
