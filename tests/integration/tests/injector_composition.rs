//! Integration tests for injectors used as module parameters and for
//! declared module interfaces

use reinhardt_wiring::visualization::DependencyGraph;
use reinhardt_wiring::{
	Dependency, DependencyList, GraphError, Injector, ModuleBuilder, ModuleInterface, Param,
	Scope, TypeKey, expand_injectors_in_params,
};
use reinhardt_wiring_integration_tests::{
	AppConfig, AuditEntry, AuditLog, Clock, Database, UserRepository, UserService, app_module,
	storage_module,
};
use rstest::*;
use std::sync::Arc;

#[fixture]
fn parent() -> Injector<(AppConfig,)> {
	let module = ModuleBuilder::new()
		.bind_instance(AppConfig::test())
		.build()
		.unwrap();
	Injector::new(module).unwrap()
}

#[fixture]
fn declared_storage() -> ModuleInterface {
	let deps = DependencyList::new()
		.add_dep(
			Dependency::new(
				TypeKey::of::<UserRepository>(),
				[TypeKey::of::<AppConfig>()],
			)
			.unwrap(),
		)
		.unwrap();
	ModuleInterface::new(
		vec![TypeKey::of::<UserRepository>()],
		vec![TypeKey::of::<AppConfig>()],
		deps,
	)
}

#[rstest]
fn injector_params_expand_in_place() {
	// Arrange
	let params = [
		Param::of::<Clock>(),
		Param::injector::<(Database, UserRepository)>(),
		Param::of::<UserService>(),
	];

	// Act
	let expanded = expand_injectors_in_params(&params);

	// Assert
	assert_eq!(
		expanded,
		vec![
			TypeKey::of::<Clock>(),
			TypeKey::of::<Database>(),
			TypeKey::of::<UserRepository>(),
			TypeKey::of::<UserService>(),
		]
	);
}

#[rstest]
fn child_module_resolves_through_parent(parent: Injector<(AppConfig,)>) {
	// Arrange
	let module = storage_module()
		.with_parent(&parent)
		.register::<Clock>()
		.register::<UserService>()
		.build()
		.unwrap();

	// Act
	let child: Injector<(UserService, AppConfig)> = Injector::new(module).unwrap();
	let service = child.get::<UserService, _>().unwrap();

	// Assert
	assert_eq!(service.repository.database.url, AppConfig::test().database_url);
	assert!(Arc::ptr_eq(
		&child.get::<AppConfig, _>().unwrap(),
		&parent.get::<AppConfig, _>().unwrap()
	));
	assert!(child.module().required().is_empty());
}

#[rstest]
fn parent_types_join_provided_list_in_param_order(parent: Injector<(AppConfig,)>) {
	// Arrange
	let module = storage_module()
		.with_parent(&parent)
		.register::<Clock>()
		.build()
		.unwrap();

	// Act
	let provided = module.provided();

	// Assert
	assert_eq!(parent.as_param(), Param::injector::<(AppConfig,)>());
	assert_eq!(
		provided,
		&[
			TypeKey::of::<Database>(),
			TypeKey::of::<UserRepository>(),
			TypeKey::of::<AppConfig>(),
			TypeKey::of::<Clock>(),
		]
	);
}

#[rstest]
fn module_honors_declared_interface(declared_storage: ModuleInterface) {
	// Arrange
	let module = storage_module().build().unwrap();

	// Act
	let result = module.expose(&declared_storage);

	// Assert
	assert!(result.is_ok());
}

#[rstest]
fn declared_interface_cannot_add_provided_types(declared_storage: ModuleInterface) {
	// Arrange
	let module = storage_module().build().unwrap();
	let mut declared = declared_storage;
	declared.provided.push(TypeKey::of::<Clock>());

	// Act
	let result = module.expose(&declared);

	// Assert
	match result {
		Err(GraphError::AdditionalProvidedTypes { types }) => assert!(types.contains("Clock")),
		other => panic!("expected additional provided types, got {:?}", other),
	}
}

#[rstest]
fn declared_interface_must_keep_requirements(declared_storage: ModuleInterface) {
	// Arrange
	let module = storage_module().build().unwrap();
	let declared = ModuleInterface::new(
		declared_storage.provided,
		Vec::new(),
		declared_storage.deps,
	);

	// Act
	let result = module.expose(&declared);

	// Assert
	assert!(matches!(
		result,
		Err(GraphError::UndroppedRequirements { .. })
	));
}

#[rstest]
fn declared_dependency_must_entail_assembled_one() {
	// Arrange
	let module = storage_module().build().unwrap();
	let deps = DependencyList::new()
		.add_dep(Dependency::construct(TypeKey::of::<UserRepository>(), &[]).unwrap())
		.unwrap();
	let declared = ModuleInterface::new(
		vec![TypeKey::of::<UserRepository>()],
		vec![TypeKey::of::<AppConfig>()],
		deps,
	);

	// Act
	let result = module.expose(&declared);

	// Assert
	match result {
		Err(GraphError::DependencyNotEntailed { type_name, extra }) => {
			assert!(type_name.ends_with("UserRepository"));
			assert!(extra.contains("AppConfig"));
		}
		other => panic!("expected a non-entailed dependency, got {:?}", other),
	}
}

#[rstest]
fn dot_export_colors_nodes_by_scope() {
	// Arrange
	let module = app_module(AppConfig::test())
		.bind_instance(AuditLog::default())
		.register_provider(Scope::NewInstance, |(log,): (Arc<AuditLog>,)| log.record())
		.build()
		.unwrap();

	// Act
	let graph = DependencyGraph::from_module(&module);
	let dot = graph.to_dot();
	let stats = graph.statistics();

	// Assert
	assert!(dot.starts_with("digraph DependencyGraph {"));
	assert!(dot.contains(&format!(
		"\"{}\" -> \"{}\";",
		std::any::type_name::<UserService>(),
		std::any::type_name::<UserRepository>()
	)));
	assert!(dot.contains(&format!(
		"\"{}\" [label=\"AuditEntry\\n(",
		std::any::type_name::<AuditEntry>()
	)));
	assert!(dot.contains("fillcolor=lightyellow"));
	assert_eq!(stats.node_count, 7);
	assert_eq!(stats.new_instance_count, 1);
	assert_eq!(
		graph
			.nodes()
			.iter()
			.filter(|node| node.type_name == std::any::type_name::<AuditEntry>())
			.count(),
		1
	);
}
