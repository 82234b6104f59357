//! Ordered set primitives over type descriptors
//!
//! Requirement lists are small, so they are kept as `Vec`s that behave like
//! sets: no duplicates, first insertion position wins.

use crate::key::TypeKey;

/// Appends `key` unless it is already present.
pub fn push_unique(list: &mut Vec<TypeKey>, key: TypeKey) {
	if !list.contains(&key) {
		list.push(key);
	}
}

/// Ordered union of `left` and `right`.
pub fn union(left: &[TypeKey], right: &[TypeKey]) -> Vec<TypeKey> {
	let mut result = dedup(left.iter().copied());
	for key in right {
		push_unique(&mut result, *key);
	}
	result
}

/// Removes duplicates, keeping the first occurrence.
pub fn dedup(keys: impl IntoIterator<Item = TypeKey>) -> Vec<TypeKey> {
	let mut result = Vec::new();
	for key in keys {
		push_unique(&mut result, key);
	}
	result
}

/// Members of `left` that are not in `right`.
pub fn set_difference(left: &[TypeKey], right: &[TypeKey]) -> Vec<TypeKey> {
	left.iter()
		.filter(|key| !right.contains(key))
		.copied()
		.collect()
}

pub fn is_subset(subset: &[TypeKey], superset: &[TypeKey]) -> bool {
	subset.iter().all(|key| superset.contains(key))
}

/// Replaces `target` in `list` with the members of `replacement`.
///
/// Replacement members already present in `list` are not repeated. If
/// `target` does not occur, `list` is returned unchanged.
pub fn replace_with_set(
	target: TypeKey,
	replacement: &[TypeKey],
	list: &[TypeKey],
) -> Vec<TypeKey> {
	if !list.contains(&target) {
		return list.to_vec();
	}

	let mut result = Vec::with_capacity(list.len() + replacement.len());
	for key in list {
		if *key == target {
			for replaced in replacement {
				push_unique(&mut result, *replaced);
			}
		} else {
			push_unique(&mut result, *key);
		}
	}
	result
}
