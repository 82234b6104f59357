//! Public interface of a module and the delta check between interfaces.

use crate::algebra;
use crate::dependency_list::DependencyList;
use crate::entailment::check_deps_subset;
use crate::error::{GraphError, GraphResult};
use crate::key::{TypeKey, join_names};

/// What a module provides, what it still needs, and how its provided types
/// depend on what it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleInterface {
	pub provided: Vec<TypeKey>,
	pub required: Vec<TypeKey>,
	pub deps: DependencyList,
}

impl ModuleInterface {
	pub fn new(provided: Vec<TypeKey>, required: Vec<TypeKey>, deps: DependencyList) -> Self {
		Self {
			provided: algebra::dedup(provided),
			required: algebra::dedup(required),
			deps,
		}
	}

	pub fn provides(&self, key: TypeKey) -> bool {
		self.provided.contains(&key)
	}

	pub fn requires(&self, key: TypeKey) -> bool {
		self.required.contains(&key)
	}

	/// Whether `self` can be used wherever `entailed` is expected.
	///
	/// See [`check_module_entails`].
	pub fn entails(&self, entailed: &ModuleInterface) -> GraphResult<()> {
		check_module_entails(self, entailed)
	}
}

/// Checks that `m` offers at least what `entailed` promises.
///
/// In order: `entailed` must not provide anything `m` does not, `m` must not
/// require anything `entailed` no longer requires, and every dependency of
/// `entailed` must be entailed by `m`'s dependencies. The first failure is
/// returned.
pub fn check_module_entails(m: &ModuleInterface, entailed: &ModuleInterface) -> GraphResult<()> {
	let additional = algebra::set_difference(&entailed.provided, &m.provided);
	if !additional.is_empty() {
		return Err(GraphError::AdditionalProvidedTypes {
			types: join_names(&additional),
		});
	}

	let undropped = algebra::set_difference(&m.required, &entailed.required);
	if !undropped.is_empty() {
		return Err(GraphError::UndroppedRequirements {
			types: join_names(&undropped),
		});
	}

	check_deps_subset(&entailed.deps, &m.deps)?;
	tracing::debug!(
		provided = entailed.provided.len(),
		required = entailed.required.len(),
		"module interface entailed"
	);
	Ok(())
}
