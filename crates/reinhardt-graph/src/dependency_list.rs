//! Closed dependency lists and the incremental merge.
//!
//! A [`DependencyList`] is kept *closed*: no entry requires a type that is
//! itself the head of an entry, and no entry requires its own head. Each
//! requirement left in the list is therefore a type the surrounding module
//! still needs from outside.
//!
//! Merging a new entry substitutes known heads into its requirements, then
//! substitutes the new head into every existing entry. A cycle through
//! several entries collapses into a self-loop on the entry that closes it,
//! so the merge rejects cycles of any length.

use crate::algebra;
use crate::dependency::Dependency;
use crate::error::{GraphError, GraphResult};
use crate::key::TypeKey;

/// Positional list of dependencies with pairwise-distinct heads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList {
	entries: Vec<Dependency>,
}

impl DependencyList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Merges a single entry.
	///
	/// Re-adding an entry that is already present (after canonicalization)
	/// leaves the list unchanged.
	///
	/// # Errors
	///
	/// [`GraphError::SelfLoop`] if `dep` ends up requiring itself, and
	/// [`GraphError::DuplicateProvider`] if its head is already bound with
	/// different requirements.
	pub fn add_dep(mut self, dep: Dependency) -> GraphResult<Self> {
		// Checked before canonicalization, which may substitute the loop away.
		if dep.has_self_loop() {
			return Err(GraphError::SelfLoop {
				type_name: dep.head().name().to_string(),
			});
		}

		let canonical = dep.canonicalize_with_all(&self.entries);
		tracing::trace!(dep = %dep, canonical = %canonical, "canonicalized dependency");

		if canonical.has_self_loop() {
			return Err(GraphError::SelfLoop {
				type_name: canonical.head().name().to_string(),
			});
		}

		if let Some(existing) = self.get(canonical.head()) {
			if *existing == canonical {
				tracing::trace!(head = %canonical.head(), "dependency already present");
				return Ok(self);
			}
			return Err(GraphError::DuplicateProvider {
				type_name: canonical.head().name().to_string(),
			});
		}

		for entry in &mut self.entries {
			*entry = entry.canonicalize_with(&canonical);
		}
		tracing::trace!(
			head = %canonical.head(),
			entries = self.entries.len() + 1,
			"merged dependency"
		);
		self.entries.push(canonical);
		Ok(self)
	}

	/// Merges a batch, last element first.
	pub fn add_deps(
		self,
		batch: impl IntoIterator<Item = Dependency, IntoIter: DoubleEndedIterator>,
	) -> GraphResult<Self> {
		batch
			.into_iter()
			.rev()
			.try_fold(self, |list, dep| list.add_dep(dep))
	}

	/// Every entry canonicalized against the whole list.
	pub fn canonicalized(&self) -> Self {
		Self {
			entries: self
				.entries
				.iter()
				.map(|dep| dep.canonicalize_with_all(&self.entries))
				.collect(),
		}
	}

	/// Drops `key` from the requirements of every entry.
	pub fn remove_requirement(&self, key: TypeKey) -> Self {
		Self {
			entries: self
				.entries
				.iter()
				.map(|dep| dep.without_requirement(key))
				.collect(),
		}
	}

	/// Union of the requirements of all entries, in first-seen order.
	pub fn requirements(&self) -> Vec<TypeKey> {
		algebra::dedup(
			self.entries
				.iter()
				.flat_map(|dep| dep.requirements().iter().copied()),
		)
	}

	pub fn heads(&self) -> Vec<TypeKey> {
		self.entries.iter().map(Dependency::head).collect()
	}

	pub fn get(&self, head: TypeKey) -> Option<&Dependency> {
		self.entries.iter().find(|dep| dep.head() == head)
	}

	pub fn contains(&self, head: TypeKey) -> bool {
		self.get(head).is_some()
	}

	/// No entry requires a head of the list, and none requires itself.
	pub fn is_closed(&self) -> bool {
		let heads = self.heads();
		self.entries
			.iter()
			.all(|dep| !dep.requirements().iter().any(|r| heads.contains(r)))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
		self.entries.iter()
	}

	pub fn as_slice(&self) -> &[Dependency] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<'a> IntoIterator for &'a DependencyList {
	type Item = &'a Dependency;
	type IntoIter = std::slice::Iter<'a, Dependency>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl IntoIterator for DependencyList {
	type Item = Dependency;
	type IntoIter = std::vec::IntoIter<Dependency>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
