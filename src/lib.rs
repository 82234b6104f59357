//! # Reinhardt Wiring
//!
//! Compile-time checked dependency wiring.
//!
//! This crate re-exports [`reinhardt_graph`]: declare how components are
//! constructed, assemble them into a module, and hand out typed injectors.
//! A graph with missing bindings, cycles, duplicate providers or self-loops is
//! rejected before any object is constructed, and an injector only compiles
//! `get` calls for the types it declares.
//!
//! ## Feature Flags
//!
//! - `macros` (default): the `#[injectable]` attribute
//! - `dev-tools`: DOT export of assembled modules (`visualization`)
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_wiring::prelude::*;
//! use std::sync::Arc;
//!
//! struct Settings {
//!     debug: bool,
//! }
//!
//! struct Logger {
//!     verbose: bool,
//! }
//!
//! #[injectable]
//! impl Logger {
//!     #[inject]
//!     fn new(settings: Arc<Settings>) -> Self {
//!         Self { verbose: settings.debug }
//!     }
//! }
//!
//! let module = ModuleBuilder::new()
//!     .bind_instance(Settings { debug: true })
//!     .register::<Logger>()
//!     .build()?;
//!
//! let injector: Injector<(Logger, Settings)> = Injector::new(module)?;
//! let logger: Arc<Logger> = injector.get()?;
//! assert!(logger.verbose);
//! # Ok::<(), reinhardt_wiring::GraphError>(())
//! ```

pub use reinhardt_graph::*;

/// Commonly used types
pub mod prelude {
	pub use reinhardt_graph::{
		AssembledModule, GraphError, GraphResult, GraphSettings, Inject, Injector, ModuleBuilder,
		ModuleInterface, Scope,
	};

	#[cfg(feature = "macros")]
	pub use reinhardt_graph::injectable;
}
