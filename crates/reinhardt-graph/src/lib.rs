//! # Reinhardt Graph
//!
//! Verified dependency graphs for Reinhardt wiring.
//!
//! Components declare how they are constructed; a module collects those
//! declarations and checks the whole graph once, before any object is built.
//! Only a well-formed graph (no missing bindings, no cycles, no duplicate
//! providers, no self-loops) is turned into an [`AssembledModule`].
//!
//! ## Features
//!
//! - **Checked at compile time**: `#[injectable]` validates constructor
//!   annotations, and [`Injector::get`] only compiles for provided types
//! - **Checked at assembly time**: canonicalization, entailment and interface
//!   checks over [`TypeKey`] descriptors
//! - **Scoped**: singleton and new-instance bindings
//!
//! ## Development Tools (dev-tools feature)
//!
//! - **Visualization**: Generate dependency graphs in DOT format for Graphviz
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_graph::{Injector, ModuleBuilder, injectable};
//! use std::sync::Arc;
//!
//! struct Config {
//!     name: String,
//! }
//!
//! struct Greeter {
//!     config: Arc<Config>,
//! }
//!
//! #[injectable]
//! impl Greeter {
//!     #[inject]
//!     fn new(config: Arc<Config>) -> Self {
//!         Self { config }
//!     }
//!
//!     fn greet(&self) -> String {
//!         format!("hello from {}", self.config.name)
//!     }
//! }
//!
//! let module = ModuleBuilder::new()
//!     .bind_instance(Config { name: "reinhardt".to_string() })
//!     .register::<Greeter>()
//!     .build()
//!     .unwrap();
//!
//! let injector: Injector<(Greeter,)> = Injector::new(module).unwrap();
//! let greeter: Arc<Greeter> = injector.get().unwrap();
//! assert_eq!(greeter.greet(), "hello from reinhardt");
//! ```

extern crate self as reinhardt_graph;

pub mod algebra;
pub mod cycle_detection;
pub mod dependency;
pub mod dependency_list;
pub mod entailment;
pub mod error;
pub mod injector;
pub mod interface;
pub mod key;
pub mod module;
pub mod params;
pub mod resolver;
pub mod scope;
pub mod settings;
pub mod signature;
pub mod type_list;

// Development tools
#[cfg(feature = "dev-tools")]
pub mod visualization;

pub use cycle_detection::{check_acyclic, detect_cycles};
pub use dependency::Dependency;
pub use dependency_list::DependencyList;
pub use entailment::{check_dep_entailed, check_deps_subset};
pub use error::{DiagnosticKind, GraphError, GraphResult};
pub use injector::Injector;
pub use interface::{ModuleInterface, check_module_entails};
pub use key::{Shape, TypeKey};
pub use module::{AssembledModule, Binding, ModuleBuilder};
pub use params::{Param, expand_injectors_in_params};
pub use resolver::{Instance, Resolver, downcast_instance};
pub use scope::{Scope, SingletonScope};
pub use settings::{CycleDetection, GraphSettings};
pub use signature::{
	Arg, ArgList, Assisted, Inject, Introspected, Signature, SignatureArg, introspect,
};
pub use type_list::{Index, Provides, TypeList};

#[cfg(feature = "macros")]
pub use reinhardt_graph_macros::injectable;
