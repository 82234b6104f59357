//! Dependency entries: "constructing `head` needs `requirements`".

use crate::algebra;
use crate::error::{GraphError, GraphResult};
use crate::key::{TypeKey, join_names};
use crate::signature::{Inject, Signature, introspect};
use std::fmt;

/// A single node of a dependency graph.
///
/// Requirements are a set kept in insertion order. Neither the head nor a
/// requirement may be a type-level list.
#[derive(Clone, PartialEq, Eq)]
pub struct Dependency {
	head: TypeKey,
	requirements: Vec<TypeKey>,
}

impl Dependency {
	pub fn new(
		head: TypeKey,
		requirements: impl IntoIterator<Item = TypeKey>,
	) -> GraphResult<Self> {
		let requirements = algebra::dedup(requirements);
		if head.is_list() {
			return Err(GraphError::InvalidSignature {
				type_name: head.name().to_string(),
				position: "result",
			});
		}
		if let Some(list) = requirements.iter().find(|key| key.is_list()) {
			return Err(GraphError::InvalidSignature {
				type_name: list.name().to_string(),
				position: "argument",
			});
		}
		Ok(Self { head, requirements })
	}

	/// `head` needs every member of `requirements`.
	pub fn construct(head: TypeKey, requirements: &[TypeKey]) -> GraphResult<Self> {
		Self::new(head, requirements.iter().copied())
	}

	/// A dependency without requirements. `head` must be scalar.
	pub(crate) fn leaf(head: TypeKey) -> Self {
		Self {
			head,
			requirements: Vec::new(),
		}
	}

	/// Dependency read from a validated signature.
	pub fn from_signature(signature: &Signature) -> GraphResult<Self> {
		signature.validate()?;
		Self::new(signature.result(), signature.requirements())
	}

	/// Dependency of an injectable component.
	pub fn of<C: Inject>() -> GraphResult<Self> {
		let introspected = introspect::<C>()?;
		Self::from_signature(&introspected.signature)
	}

	pub fn head(&self) -> TypeKey {
		self.head
	}

	pub fn requirements(&self) -> &[TypeKey] {
		&self.requirements
	}

	pub fn requires(&self, key: TypeKey) -> bool {
		self.requirements.contains(&key)
	}

	pub fn has_self_loop(&self) -> bool {
		self.requires(self.head)
	}

	/// Replaces `other.head` in the requirements with `other`'s requirements.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_graph::{Dependency, TypeKey};
	///
	/// struct A;
	/// struct B;
	/// struct C;
	///
	/// let a = Dependency::construct(TypeKey::of::<A>(), &[TypeKey::of::<B>()]).unwrap();
	/// let b = Dependency::construct(TypeKey::of::<B>(), &[TypeKey::of::<C>()]).unwrap();
	///
	/// assert_eq!(a.canonicalize_with(&b).requirements(), &[TypeKey::of::<C>()]);
	/// ```
	pub fn canonicalize_with(&self, other: &Dependency) -> Dependency {
		Dependency {
			head: self.head,
			requirements: algebra::replace_with_set(other.head, &other.requirements, &self.requirements),
		}
	}

	/// Canonicalizes against every entry of `deps`, last entry first.
	pub fn canonicalize_with_all(&self, deps: &[Dependency]) -> Dependency {
		deps.iter()
			.rev()
			.fold(self.clone(), |dep, other| dep.canonicalize_with(other))
	}

	pub fn without_requirement(&self, key: TypeKey) -> Dependency {
		Dependency {
			head: self.head,
			requirements: self.requirements.iter().copied().filter(|r| *r != key).collect(),
		}
	}

	/// Requirements of `self` that are missing from `other`.
	pub(crate) fn extra_requirements(&self, other: &Dependency) -> Vec<TypeKey> {
		algebra::set_difference(&self.requirements, &other.requirements)
	}
}

impl fmt::Debug for Dependency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?} <- {:?}", self.head, self.requirements)
	}
}

impl fmt::Display for Dependency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.requirements.is_empty() {
			write!(f, "`{}` (no requirements)", self.head)
		} else {
			write!(f, "`{}` needs {}", self.head, join_names(&self.requirements))
		}
	}
}
