//! Module assembly
//!
//! A [`ModuleBuilder`] collects bindings; [`ModuleBuilder::build`] runs the
//! whole graph check once and only then yields an [`AssembledModule`]. Once
//! assembled, a module trusts its graph: instances are constructed on demand
//! in dependency order and singletons are cached.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_graph::{ModuleBuilder, injectable};
//! use std::sync::Arc;
//!
//! struct Config {
//!     url: String,
//! }
//!
//! struct Database {
//!     url: String,
//! }
//!
//! #[injectable]
//! impl Database {
//!     #[inject]
//!     fn new(config: Arc<Config>) -> Self {
//!         Self { url: config.url.clone() }
//!     }
//! }
//!
//! let module = ModuleBuilder::new()
//!     .bind_instance(Config { url: "postgres://localhost".to_string() })
//!     .register::<Database>()
//!     .build()
//!     .unwrap();
//!
//! let database = module.get::<Database>().unwrap();
//! assert_eq!(database.url, "postgres://localhost");
//! ```

use crate::algebra;
use crate::cycle_detection::check_acyclic;
use crate::dependency::Dependency;
use crate::dependency_list::DependencyList;
use crate::error::{GraphError, GraphResult};
use crate::injector::Injector;
use crate::interface::{ModuleInterface, check_module_entails};
use crate::key::{TypeKey, join_names};
use crate::params::{Param, expand_injectors_in_params};
use crate::resolver::{Instance, Resolver, downcast_instance};
use crate::scope::{Scope, SingletonScope};
use crate::settings::{CycleDetection, GraphSettings};
use crate::signature::{ArgList, Inject, Signature, introspect};
use crate::type_list::TypeList;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

type Factory = Arc<dyn Fn(&dyn Resolver) -> GraphResult<Instance> + Send + Sync>;

fn factory<F>(f: F) -> Factory
where
	F: Fn(&dyn Resolver) -> GraphResult<Instance> + Send + Sync + 'static,
{
	Arc::new(f)
}

/// How a single type is produced.
#[derive(Clone)]
pub struct Binding {
	dependency: Dependency,
	scope: Scope,
	factory: Factory,
}

impl Binding {
	/// Binds `C` to its `Inject` constructor.
	pub fn constructor<C: Inject>(scope: Scope) -> GraphResult<Self> {
		let introspected = introspect::<C>()?;
		reject_assisted(&introspected.signature)?;
		let dependency = Dependency::from_signature(&introspected.signature)?;

		Ok(Self {
			dependency,
			scope,
			factory: factory(|resolver| {
				let args = C::Args::resolve_all(resolver)?;
				Ok(Arc::new(C::construct(args)) as Instance)
			}),
		})
	}

	/// Binds `T` to an existing value.
	///
	/// # Errors
	///
	/// [`GraphError::InvalidSignature`] if `T` is a tuple, array or slice.
	pub fn instance<T: Send + Sync + 'static>(value: T) -> GraphResult<Self> {
		let dependency = Dependency::construct(TypeKey::of::<T>(), &[])?;
		let instance: Instance = Arc::new(value);
		Ok(Self {
			dependency,
			scope: Scope::Singleton,
			factory: factory(move |_| Ok(Arc::clone(&instance))),
		})
	}

	/// Binds `T` to a provider function taking its arguments as a tuple.
	pub fn provider<T, A, F>(scope: Scope, provider: F) -> GraphResult<Self>
	where
		T: Send + Sync + 'static,
		A: ArgList,
		F: Fn(A) -> T + Send + Sync + 'static,
	{
		let signature = Signature::new(TypeKey::of::<T>(), A::signature_args());
		reject_assisted(&signature)?;
		let dependency = Dependency::from_signature(&signature)?;

		Ok(Self {
			dependency,
			scope,
			factory: factory(move |resolver| {
				let args = A::resolve_all(resolver)?;
				Ok(Arc::new(provider(args)) as Instance)
			}),
		})
	}

	/// Forwards `key` to a parent module, which owns its caching.
	pub(crate) fn delegate(key: TypeKey, parent: Arc<AssembledModule>) -> Self {
		Self {
			dependency: Dependency::leaf(key),
			scope: Scope::NewInstance,
			factory: factory(move |_| parent.resolve(key)),
		}
	}

	pub fn head(&self) -> TypeKey {
		self.dependency.head()
	}

	pub fn dependency(&self) -> &Dependency {
		&self.dependency
	}

	pub fn scope(&self) -> Scope {
		self.scope
	}
}

impl fmt::Debug for Binding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Binding")
			.field("dependency", &self.dependency)
			.field("scope", &self.scope)
			.finish_non_exhaustive()
	}
}

fn reject_assisted(signature: &Signature) -> GraphResult<()> {
	match signature.args().iter().find(|arg| arg.is_assisted()) {
		Some(arg) => Err(GraphError::AssistedArgument {
			type_name: arg.key().name().to_string(),
		}),
		None => Ok(()),
	}
}

/// Collects bindings and assembles them into a module.
///
/// Registration errors are kept and reported by [`build`](Self::build), so
/// registrations can be chained.
#[derive(Default)]
pub struct ModuleBuilder {
	bindings: Vec<GraphResult<Binding>>,
	required: Vec<TypeKey>,
	params: Vec<Param>,
	settings: GraphSettings,
}

impl ModuleBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: GraphSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Registers `C` as a singleton.
	pub fn register<C: Inject>(self) -> Self {
		self.register_with_scope::<C>(Scope::Singleton)
	}

	pub fn register_with_scope<C: Inject>(self, scope: Scope) -> Self {
		self.add_binding(Binding::constructor::<C>(scope))
	}

	pub fn bind_instance<T: Send + Sync + 'static>(self, value: T) -> Self {
		self.add_binding(Binding::instance(value))
	}

	/// Registers a provider function.
	///
	/// ```
	/// use reinhardt_graph::{ModuleBuilder, Scope};
	/// use std::sync::Arc;
	///
	/// struct Port(u16);
	/// struct Address(String);
	///
	/// let module = ModuleBuilder::new()
	///     .bind_instance(Port(8080))
	///     .register_provider(Scope::Singleton, |(port,): (Arc<Port>,)| {
	///         Address(format!("127.0.0.1:{}", port.0))
	///     })
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(module.get::<Address>().unwrap().0, "127.0.0.1:8080");
	/// ```
	pub fn register_provider<T, A, F>(self, scope: Scope, provider: F) -> Self
	where
		T: Send + Sync + 'static,
		A: ArgList,
		F: Fn(A) -> T + Send + Sync + 'static,
	{
		self.add_binding(Binding::provider(scope, provider))
	}

	/// Adds a prepared binding.
	pub fn add_binding(mut self, binding: GraphResult<Binding>) -> Self {
		if let Ok(binding) = &binding {
			self.params.push(Param::Type(binding.head()));
		}
		self.bindings.push(binding);
		self
	}

	/// Declares `T` as supplied from outside the module.
	pub fn require<T: ?Sized + 'static>(mut self) -> Self {
		algebra::push_unique(&mut self.required, TypeKey::of::<T>());
		self
	}

	/// Adds every binding and requirement of `other`. Settings of `self` win.
	pub fn install(mut self, other: ModuleBuilder) -> Self {
		self.bindings.extend(other.bindings);
		self.params.extend(other.params);
		for key in other.required {
			algebra::push_unique(&mut self.required, key);
		}
		self
	}

	/// Makes every type provided by `parent` available to this module.
	pub fn with_parent<Q: TypeList>(mut self, parent: &Injector<Q>) -> Self {
		let keys = Q::keys();
		for key in &keys {
			self.bindings
				.push(Ok(Binding::delegate(*key, Arc::clone(parent.module()))));
		}
		self.params.push(Param::Injector(keys));
		self
	}

	/// Assembles the module.
	///
	/// # Errors
	///
	/// The first registration error, then [`GraphError::CircularDependency`]
	/// (exhaustive cycle detection only), any merge error of
	/// [`DependencyList::add_dep`], and [`GraphError::MissingBinding`] for a
	/// requirement that is neither bound nor declared with
	/// [`require`](Self::require).
	pub fn build(self) -> GraphResult<AssembledModule> {
		let bindings = self.bindings.into_iter().collect::<GraphResult<Vec<_>>>()?;
		reject_duplicate_heads(&bindings)?;
		let raw: Vec<Dependency> = bindings
			.iter()
			.map(|binding| binding.dependency().clone())
			.collect();

		if self.settings.cycle_detection == CycleDetection::Exhaustive {
			check_acyclic(&raw)?;
		}
		let deps = DependencyList::new().add_deps(raw)?;

		let mut required = Vec::new();
		for key in deps.requirements() {
			if self.required.contains(&key) {
				required.push(key);
			} else {
				let required_by = deps
					.iter()
					.find(|dep| dep.requires(key))
					.map(|dep| dep.head().name())
					.unwrap_or_default();
				return Err(GraphError::MissingBinding {
					type_name: key.name().to_string(),
					required_by: required_by.to_string(),
				});
			}
		}
		for key in &self.required {
			if deps.contains(*key) {
				tracing::debug!(type_name = %key, "declared requirement is bound in the module");
			} else {
				algebra::push_unique(&mut required, *key);
			}
		}

		let provided = algebra::dedup(expand_injectors_in_params(&self.params));
		let interface = ModuleInterface::new(provided, required, deps);
		let table = BindingTable::new(bindings);
		let singletons = SingletonScope::with_keys(
			table
				.entries
				.iter()
				.filter(|binding| binding.scope() == Scope::Singleton)
				.map(Binding::head),
		);

		tracing::debug!(
			bindings = table.entries.len(),
			provided = interface.provided.len(),
			required = %join_names(&interface.required),
			"assembled module"
		);

		Ok(AssembledModule {
			bindings: Arc::new(table),
			interface,
			singletons,
			settings: self.settings,
		})
	}
}

/// Each type has exactly one binding, even when two bindings would merge
/// into the same dependency.
fn reject_duplicate_heads(bindings: &[Binding]) -> GraphResult<()> {
	let mut seen = HashSet::new();
	for binding in bindings {
		if !seen.insert(binding.head().id()) {
			tracing::warn!(type_name = %binding.head(), "type bound more than once");
			return Err(GraphError::DuplicateProvider {
				type_name: binding.head().name().to_string(),
			});
		}
	}
	Ok(())
}

struct BindingTable {
	entries: Vec<Binding>,
	index: HashMap<TypeId, usize>,
}

impl BindingTable {
	/// Heads are distinct, see [`reject_duplicate_heads`].
	fn new(entries: Vec<Binding>) -> Self {
		let index = entries
			.iter()
			.enumerate()
			.map(|(i, binding)| (binding.head().id(), i))
			.collect();
		Self { entries, index }
	}

	fn get(&self, key: TypeKey) -> Option<&Binding> {
		self.index.get(&key.id()).map(|&i| &self.entries[i])
	}
}

/// A validated, type-erased set of bindings.
///
/// Cloning yields an independently owned module: bindings are shared,
/// singleton slots are copied, so singletons constructed afterwards are not
/// shared between the copies.
#[derive(Clone)]
pub struct AssembledModule {
	bindings: Arc<BindingTable>,
	interface: ModuleInterface,
	singletons: SingletonScope,
	settings: GraphSettings,
}

impl AssembledModule {
	pub fn interface(&self) -> &ModuleInterface {
		&self.interface
	}

	pub fn provided(&self) -> &[TypeKey] {
		&self.interface.provided
	}

	pub fn required(&self) -> &[TypeKey] {
		&self.interface.required
	}

	pub fn provides(&self, key: TypeKey) -> bool {
		self.interface.provides(key)
	}

	pub fn settings(&self) -> &GraphSettings {
		&self.settings
	}

	pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
		self.bindings.entries.iter()
	}

	pub fn singletons(&self) -> &SingletonScope {
		&self.singletons
	}

	/// Checks that this module honors `interface`.
	pub fn expose(&self, interface: &ModuleInterface) -> GraphResult<()> {
		check_module_entails(&self.interface, interface)
	}

	/// Returns the instance of `T`, constructing it if needed.
	pub fn get<T: Send + Sync + 'static>(&self) -> GraphResult<Arc<T>> {
		let key = TypeKey::of::<T>();
		if !self.provides(key) {
			return Err(GraphError::NotProvided {
				type_name: key.name().to_string(),
			});
		}
		downcast_instance(self.resolve(key)?, key)
	}

	/// Constructs every singleton that is not constructed yet.
	pub fn eagerly_inject_all(&self) -> GraphResult<()> {
		for binding in &self.bindings.entries {
			if binding.scope() == Scope::Singleton {
				self.resolve(binding.head())?;
			}
		}
		tracing::debug!(
			singletons = self.singletons.initialized_count(),
			"constructed all singletons"
		);
		Ok(())
	}
}

impl Resolver for AssembledModule {
	fn resolve(&self, key: TypeKey) -> GraphResult<Instance> {
		let binding = self.bindings.get(key).ok_or_else(|| GraphError::NotProvided {
			type_name: key.name().to_string(),
		})?;

		let resolver: &dyn Resolver = self;
		match binding.scope() {
			Scope::Singleton => self
				.singletons
				.get_or_try_init(key, || (binding.factory)(resolver)),
			Scope::NewInstance => (binding.factory)(resolver),
		}
	}
}

impl fmt::Debug for AssembledModule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AssembledModule")
			.field("interface", &self.interface)
			.field("singletons", &self.singletons.initialized_count())
			.finish_non_exhaustive()
	}
}
