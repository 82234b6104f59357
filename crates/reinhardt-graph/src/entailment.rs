//! Entailment between dependencies.
//!
//! A dependency `d` is entailed by a list when the list has an entry with the
//! same head whose requirements are a subset of `d`'s: whatever `d` promises
//! to need is enough for the list's entry.

use crate::dependency::Dependency;
use crate::dependency_list::DependencyList;
use crate::error::{GraphError, GraphResult};
use crate::key::join_names;

pub fn check_dep_entailed(dep: &Dependency, deps: &DependencyList) -> GraphResult<()> {
	let found = deps.get(dep.head()).ok_or_else(|| GraphError::MissingDependency {
		type_name: dep.head().name().to_string(),
	})?;

	let extra = found.extra_requirements(dep);
	if !extra.is_empty() {
		return Err(GraphError::DependencyNotEntailed {
			type_name: dep.head().name().to_string(),
			extra: join_names(&extra),
		});
	}
	Ok(())
}

/// Checks every entry of `subset` against `deps`. An empty subset holds.
pub fn check_deps_subset(subset: &DependencyList, deps: &DependencyList) -> GraphResult<()> {
	subset.iter().try_for_each(|dep| check_dep_entailed(dep, deps))
}
