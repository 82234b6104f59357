//! Exhaustive cycle detection over raw dependencies
//!
//! Incremental merging already rejects cycles, but only as a self-loop on the
//! entry that closes them. This pass walks the uncanonicalized
//! head → requirement edges before merging so the full circular path can be
//! reported.
//!
//! ## Features
//!
//! - **Deterministic**: nodes and edges are visited in declaration order
//! - **Full path**: errors carry the cycle as `A -> B -> C -> A`

use crate::dependency::Dependency;
use crate::error::{GraphError, GraphResult};
use crate::key::TypeKey;
use std::collections::{HashMap, HashSet};

/// Finds every elementary cycle reachable by a depth-first walk.
///
/// Each cycle is returned starting at the node where it was entered, without
/// repeating that node at the end.
pub fn detect_cycles(deps: &[Dependency]) -> Vec<Vec<TypeKey>> {
	let edges: HashMap<TypeKey, &[TypeKey]> = deps
		.iter()
		.map(|dep| (dep.head(), dep.requirements()))
		.collect();

	let mut cycles = Vec::new();
	let mut visited = HashSet::new();
	let mut rec_stack = HashSet::new();

	for dep in deps {
		if !visited.contains(&dep.head()) {
			let mut path = Vec::new();
			dfs_detect_cycles(
				dep.head(),
				&edges,
				&mut visited,
				&mut rec_stack,
				&mut path,
				&mut cycles,
			);
		}
	}

	cycles
}

fn dfs_detect_cycles(
	node: TypeKey,
	edges: &HashMap<TypeKey, &[TypeKey]>,
	visited: &mut HashSet<TypeKey>,
	rec_stack: &mut HashSet<TypeKey>,
	path: &mut Vec<TypeKey>,
	cycles: &mut Vec<Vec<TypeKey>>,
) {
	visited.insert(node);
	rec_stack.insert(node);
	path.push(node);

	for next in edges.get(&node).copied().unwrap_or_default() {
		if !visited.contains(next) {
			dfs_detect_cycles(*next, edges, visited, rec_stack, path, cycles);
		} else if rec_stack.contains(next)
			&& let Some(cycle_start) = path.iter().position(|p| p == next)
		{
			cycles.push(path[cycle_start..].to_vec());
		}
	}

	path.pop();
	rec_stack.remove(&node);
}

/// Fails with the first cycle found, in the format `A -> B -> C -> A`.
///
/// A type requiring itself is reported as [`GraphError::SelfLoop`].
pub fn check_acyclic(deps: &[Dependency]) -> GraphResult<()> {
	match detect_cycles(deps).into_iter().next() {
		None => Ok(()),
		Some(cycle) if cycle.len() == 1 => Err(GraphError::SelfLoop {
			type_name: cycle[0].name().to_string(),
		}),
		Some(cycle) => {
			let path = format_cycle_path(&cycle);
			tracing::debug!(path = %path, "dependency cycle detected");
			Err(GraphError::CircularDependency {
				type_name: cycle
					.last()
					.map(|key| key.name().to_string())
					.unwrap_or_default(),
				path,
			})
		}
	}
}

fn format_cycle_path(cycle: &[TypeKey]) -> String {
	cycle
		.iter()
		.chain(cycle.first())
		.map(|key| short_name(key.name()))
		.collect::<Vec<_>>()
		.join(" -> ")
}

/// Last path segment of a type name, keeping generic arguments intact.
pub(crate) fn short_name(name: &str) -> &str {
	let end = name.find('<').unwrap_or(name.len());
	match name[..end].rfind("::") {
		Some(pos) => &name[pos + 2..],
		None => name,
	}
}
