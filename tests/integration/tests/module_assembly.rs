//! Integration tests for module assembly and instance resolution

use reinhardt_wiring::{
	CycleDetection, Dependency, DependencyList, GraphError, GraphSettings, Injector,
	ModuleBuilder, Scope, TypeKey,
};
use reinhardt_wiring_integration_tests::{
	Alpha, AppConfig, AuditEntry, AuditLog, Beta, Clock, Database, Gamma, UserRepository,
	UserService, app_module, storage_module,
};
use rstest::*;
use std::io::Write as _;
use std::sync::Arc;

#[fixture]
fn config() -> AppConfig {
	AppConfig::test()
}

#[rstest]
fn resolves_component_through_injector(config: AppConfig) {
	// Arrange
	let module = app_module(config.clone()).build().unwrap();

	// Act
	let injector: Injector<(UserService, AppConfig)> = Injector::new(module).unwrap();
	let service = injector.get::<UserService, _>().unwrap();

	// Assert
	assert_eq!(
		service.describe(),
		format!("{}@1700000000", config.database_url)
	);
	assert_eq!(*injector.get::<AppConfig, _>().unwrap(), config);
}

#[rstest]
fn singleton_dependencies_are_shared(config: AppConfig) {
	// Arrange
	let module = app_module(config).build().unwrap();
	let injector: Injector<(UserService, UserRepository)> = Injector::new(module).unwrap();

	// Act
	let service = injector.get::<UserService, _>().unwrap();
	let repository = injector.get::<UserRepository, _>().unwrap();

	// Assert
	assert!(Arc::ptr_eq(&service.repository, &repository));
	assert!(Arc::ptr_eq(
		&service,
		&injector.get::<UserService, _>().unwrap()
	));
}

#[rstest]
#[case(Scope::Singleton, 1)]
#[case(Scope::NewInstance, 3)]
fn provider_scope_controls_construction_count(#[case] scope: Scope, #[case] expected: usize) {
	// Arrange
	let module = ModuleBuilder::new()
		.bind_instance(AuditLog::default())
		.register_provider(scope, |(log,): (Arc<AuditLog>,)| log.record())
		.build()
		.unwrap();
	let injector: Injector<(AuditEntry, AuditLog)> = Injector::new(module).unwrap();

	// Act
	let entries: Vec<Arc<AuditEntry>> = (0..3)
		.map(|_| injector.get::<AuditEntry, _>().unwrap())
		.collect();

	// Assert
	assert_eq!(injector.get::<AuditLog, _>().unwrap().count(), expected);
	assert_eq!(entries[2].sequence, expected - 1);
}

#[rstest]
fn transitive_requirements_are_canonicalized() {
	// Arrange
	// UserRepository needs Database, Database needs AppConfig.
	let module = storage_module().build().unwrap();

	// Act
	let deps = &module.interface().deps;

	// Assert
	assert!(deps.is_closed());
	assert_eq!(
		deps.get(TypeKey::of::<UserRepository>()).unwrap().requirements(),
		&[TypeKey::of::<AppConfig>()]
	);
	assert_eq!(module.required(), &[TypeKey::of::<AppConfig>()]);
	assert_eq!(
		module.provided(),
		&[TypeKey::of::<Database>(), TypeKey::of::<UserRepository>()]
	);
}

#[rstest]
fn merging_pairs_replaces_bound_requirement() {
	// Arrange
	let a_needs_b = Dependency::of::<UserRepository>().unwrap();
	let b_needs_c = Dependency::of::<Database>().unwrap();

	// Act
	let merged = DependencyList::new()
		.add_deps([a_needs_b, b_needs_c])
		.unwrap();

	// Assert
	assert_eq!(merged.len(), 2);
	assert_eq!(
		merged.get(TypeKey::of::<UserRepository>()).unwrap().requirements(),
		&[TypeKey::of::<AppConfig>()]
	);
	assert_eq!(merged.requirements(), vec![TypeKey::of::<AppConfig>()]);
}

#[rstest]
fn closed_module_has_no_requirements(config: AppConfig) {
	// Arrange & Act
	let module = app_module(config).build().unwrap();

	// Assert
	assert!(module.required().is_empty());
	assert!(
		module
			.interface()
			.deps
			.iter()
			.all(|dep| dep.requirements().is_empty())
	);
}

#[rstest]
fn cloned_modules_do_not_share_later_singletons(config: AppConfig) {
	// Arrange
	let module = app_module(config).build().unwrap();
	let copy = module.clone();

	// Act
	let original = module.get::<Clock>().unwrap();
	let copied = copy.get::<Clock>().unwrap();

	// Assert
	assert!(!Arc::ptr_eq(&original, &copied));
	assert_eq!(module.singletons().initialized_count(), 1);
}

#[rstest]
fn settings_file_selects_incremental_cycle_detection() {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "cycle_detection = \"incremental\"").unwrap();
	let settings = GraphSettings::from_file(file.path()).unwrap();
	assert_eq!(settings.cycle_detection, CycleDetection::Incremental);

	// Act
	let result = ModuleBuilder::new()
		.with_settings(settings)
		.register::<Alpha>()
		.register::<Beta>()
		.register::<Gamma>()
		.build();

	// Assert
	assert!(matches!(result, Err(GraphError::SelfLoop { .. })));
}

#[rstest]
fn eager_settings_construct_singletons_with_injector(config: AppConfig) {
	// Arrange
	let settings = GraphSettings::new().with_eager_singletons(true);
	let module = app_module(config).with_settings(settings).build().unwrap();

	// Act
	let injector: Injector<(UserService,)> = Injector::new(module).unwrap();

	// Assert
	assert_eq!(injector.module().singletons().initialized_count(), 5);
}

#[rstest]
fn no_argument_component_through_single_type_injector() {
	// Arrange
	let module = ModuleBuilder::new().register::<Clock>().build().unwrap();

	// Act
	let injector: Injector<(Clock,)> = Injector::new(module).unwrap();
	let clock: Arc<Clock> = injector.get().unwrap();

	// Assert
	assert_eq!(clock.epoch, 1_700_000_000);
	assert_eq!(injector.provided_types(), vec![TypeKey::of::<Clock>()]);
}

#[rstest]
fn concurrent_gets_construct_singleton_once() {
	// Arrange
	let module = ModuleBuilder::new()
		.bind_instance(AuditLog::default())
		.register_provider(Scope::Singleton, |(log,): (Arc<AuditLog>,)| log.record())
		.build()
		.unwrap();
	let injector: Injector<(AuditEntry, AuditLog)> = Injector::new(module).unwrap();

	// Act
	let entries: Vec<Arc<AuditEntry>> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| {
				let injector = injector.clone();
				scope.spawn(move || injector.get::<AuditEntry, _>().unwrap())
			})
			.collect();
		handles
			.into_iter()
			.map(|handle| handle.join().unwrap())
			.collect()
	});

	// Assert
	assert_eq!(injector.get::<AuditLog, _>().unwrap().count(), 1);
	assert!(entries.iter().all(|entry| Arc::ptr_eq(entry, &entries[0])));
}
