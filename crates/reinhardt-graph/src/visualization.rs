//! Dependency graph visualization for development and debugging
//!
//! Renders the bindings of an assembled module in DOT format, which can be
//! rendered using Graphviz. Edges follow the declared requirements of each
//! binding, before canonicalization.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_graph::ModuleBuilder;
//! use reinhardt_graph::visualization::DependencyGraph;
//!
//! struct Database;
//!
//! let module = ModuleBuilder::new().bind_instance(Database).build().unwrap();
//! let dot = DependencyGraph::from_module(&module).to_dot();
//!
//! assert!(dot.contains("Database"));
//! ```

use crate::cycle_detection::short_name;
use crate::module::AssembledModule;
use crate::scope::Scope;

/// Represents a node in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
	/// Short name of the type
	pub name: String,
	pub scope: Scope,
	/// Full type name
	pub type_name: &'static str,
}

/// Dependency graph for visualization
#[derive(Debug, Default)]
pub struct DependencyGraph {
	nodes: Vec<GraphNode>,
	edges: Vec<(String, String)>,
}

impl DependencyGraph {
	pub fn from_module(module: &AssembledModule) -> Self {
		let mut graph = Self::default();
		for binding in module.bindings() {
			let head = binding.head();
			graph.nodes.push(GraphNode {
				name: short_name(head.name()).to_string(),
				scope: binding.scope(),
				type_name: head.name(),
			});
			for requirement in binding.dependency().requirements() {
				graph
					.edges
					.push((head.name().to_string(), requirement.name().to_string()));
			}
		}
		graph
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[(String, String)] {
		&self.edges
	}

	/// Generate DOT format output for Graphviz
	pub fn to_dot(&self) -> String {
		let mut output = String::from("digraph DependencyGraph {\n");
		output.push_str("  rankdir=LR;\n");
		output.push_str("  node [shape=box, style=rounded];\n\n");

		for node in &self.nodes {
			let color = match node.scope {
				Scope::Singleton => "lightblue",
				Scope::NewInstance => "lightyellow",
			};

			output.push_str(&format!(
				"  \"{}\" [label=\"{}\\n({})\", fillcolor={}, style=filled];\n",
				node.type_name, node.name, node.type_name, color
			));
		}

		output.push('\n');

		for (from, to) in &self.edges {
			output.push_str(&format!("  \"{}\" -> \"{}\";\n", from, to));
		}

		output.push_str("}\n");
		output
	}

	/// Get statistics about the dependency graph
	pub fn statistics(&self) -> GraphStatistics {
		let singleton_count = self
			.nodes
			.iter()
			.filter(|n| n.scope == Scope::Singleton)
			.count();

		GraphStatistics {
			node_count: self.nodes.len(),
			edge_count: self.edges.len(),
			singleton_count,
			new_instance_count: self.nodes.len() - singleton_count,
		}
	}
}

/// Statistics about a dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStatistics {
	/// Total number of nodes
	pub node_count: usize,
	/// Total number of edges
	pub edge_count: usize,
	/// Number of singleton-scoped bindings
	pub singleton_count: usize,
	/// Number of new-instance bindings
	pub new_instance_count: usize,
}
