//! Type descriptors
//!
//! The assembly phase reasons about types through [`TypeKey`] values: a
//! `TypeId` for identity plus the type name for diagnostics.

use crate::type_list::TypeList;
use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Whether a descriptor names an ordinary type or a type-level list.
///
/// Lists (tuples used as [`TypeList`]s) are collections and may never appear
/// as the result or an argument of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	Scalar,
	List,
}

/// Descriptor of a Rust type taking part in a dependency graph.
///
/// Equality and hashing only consider the `TypeId`.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
	shape: Shape,
}

impl TypeKey {
	/// Descriptor of `T`. Tuples, arrays and slices get [`Shape::List`].
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_graph::TypeKey;
	///
	/// struct Database;
	///
	/// let key = TypeKey::of::<Database>();
	/// assert!(key.name().ends_with("Database"));
	/// assert!(!key.is_list());
	/// assert!(TypeKey::of::<(Database, u8)>().is_list());
	/// ```
	pub fn of<T: ?Sized + 'static>() -> Self {
		let name = type_name::<T>();
		Self {
			id: TypeId::of::<T>(),
			name,
			shape: shape_of(name),
		}
	}

	/// Descriptor of a type-level list.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_graph::TypeKey;
	///
	/// let key = TypeKey::list_of::<(u8, u16)>();
	/// assert!(key.is_list());
	/// ```
	pub fn list_of<L: TypeList>() -> Self {
		Self {
			id: TypeId::of::<L>(),
			name: type_name::<L>(),
			shape: Shape::List,
		}
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn shape(&self) -> Shape {
		self.shape
	}

	pub fn is_list(&self) -> bool {
		self.shape == Shape::List
	}
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.shape {
			Shape::Scalar => write!(f, "{}", self.name),
			Shape::List => write!(f, "[{}]", self.name),
		}
	}
}

impl fmt::Display for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Classifies a type by its name: tuples, arrays and slices (behind any
/// number of references) are lists.
fn shape_of(name: &str) -> Shape {
	let mut rest = name;
	while let Some(inner) = rest.strip_prefix('&') {
		rest = inner.strip_prefix("mut ").unwrap_or(inner);
	}
	if rest.starts_with('(') || rest.starts_with('[') {
		Shape::List
	} else {
		Shape::Scalar
	}
}

/// Joins type names for diagnostics, e.g. `` `A`, `B` ``.
pub(crate) fn join_names<'a>(keys: impl IntoIterator<Item = &'a TypeKey>) -> String {
	keys.into_iter()
		.map(|key| format!("`{}`", key.name()))
		.collect::<Vec<_>>()
		.join(", ")
}
