//! Instance scopes

use crate::error::GraphResult;
use crate::key::TypeKey;
use crate::resolver::Instance;
use once_cell::sync::OnceCell;
use std::any::TypeId;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
	/// Constructed at most once per assembled module.
	#[default]
	Singleton,
	/// Constructed on every request.
	NewInstance,
}

/// Fixed table of singleton slots.
///
/// The slots are created when a module is assembled and never added
/// afterwards, so lookups need no lock; each slot initializes at most once
/// even under concurrent access.
#[derive(Clone, Default)]
pub struct SingletonScope {
	slots: HashMap<TypeId, OnceCell<Instance>>,
}

impl SingletonScope {
	/// Creates one empty slot per key.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_graph::{Instance, SingletonScope, TypeKey};
	/// use std::sync::Arc;
	///
	/// let scope = SingletonScope::with_keys([TypeKey::of::<u32>()]);
	/// let value = scope
	///     .get_or_try_init(TypeKey::of::<u32>(), || Ok(Arc::new(7_u32) as Instance))
	///     .unwrap();
	///
	/// assert_eq!(value.downcast_ref::<u32>(), Some(&7));
	/// assert!(scope.is_initialized(TypeKey::of::<u32>()));
	/// ```
	pub fn with_keys(keys: impl IntoIterator<Item = TypeKey>) -> Self {
		Self {
			slots: keys
				.into_iter()
				.map(|key| (key.id(), OnceCell::new()))
				.collect(),
		}
	}

	/// Returns the cached instance for `key`, running `init` on first access.
	///
	/// Keys without a slot are not cached: `init` runs on every call.
	pub fn get_or_try_init<F>(&self, key: TypeKey, init: F) -> GraphResult<Instance>
	where
		F: FnOnce() -> GraphResult<Instance>,
	{
		match self.slots.get(&key.id()) {
			Some(slot) => slot.get_or_try_init(init).cloned(),
			None => init(),
		}
	}

	pub fn get(&self, key: TypeKey) -> Option<Instance> {
		self.slots.get(&key.id()).and_then(|slot| slot.get().cloned())
	}

	pub fn has_slot(&self, key: TypeKey) -> bool {
		self.slots.contains_key(&key.id())
	}

	pub fn is_initialized(&self, key: TypeKey) -> bool {
		self.get(key).is_some()
	}

	pub fn initialized_count(&self) -> usize {
		self.slots.values().filter(|slot| slot.get().is_some()).count()
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}
