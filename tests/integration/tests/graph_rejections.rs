//! Integration tests for graphs rejected at assembly time
//!
//! Every error surfaces from `ModuleBuilder::build` or `Injector::new`, before
//! any component is constructed.

use reinhardt_wiring::{
	Assisted, CycleDetection, DiagnosticKind, GraphError, GraphSettings, Injector, ModuleBuilder,
	Scope,
};
use reinhardt_wiring_integration_tests::{
	Alpha, AppConfig, AuditLog, Beta, Clock, Database, Gamma, UserRepository, UserService,
	storage_module,
};
use rstest::*;
use std::sync::Arc;

fn ring() -> ModuleBuilder {
	ModuleBuilder::new()
		.register::<Alpha>()
		.register::<Beta>()
		.register::<Gamma>()
}

#[rstest]
fn exhaustive_detection_reports_cycle_path() {
	// Act
	let result = ring().build();

	// Assert
	match result {
		Err(GraphError::CircularDependency { type_name, path }) => {
			assert_eq!(path, "Alpha -> Beta -> Gamma -> Alpha");
			assert!(type_name.ends_with("Gamma"));
		}
		other => panic!("expected a circular dependency, got {:?}", other),
	}
}

#[rstest]
fn incremental_detection_reports_self_loop() {
	// Arrange
	let settings = GraphSettings::new().with_cycle_detection(CycleDetection::Incremental);

	// Act
	let result = ring().with_settings(settings).build();

	// Assert
	let err = result.unwrap_err();
	assert!(matches!(err, GraphError::SelfLoop { .. }));
	assert!(err.to_string().contains("depends on itself"));
	assert_eq!(err.kind(), DiagnosticKind::Graph);
}

#[rstest]
fn missing_binding_names_requiring_type() {
	// Arrange
	let builder = ModuleBuilder::new()
		.register::<Database>()
		.register::<UserRepository>();

	// Act
	let result = builder.build();

	// Assert
	match result {
		Err(GraphError::MissingBinding {
			type_name,
			required_by,
		}) => {
			assert!(type_name.ends_with("AppConfig"));
			assert!(!required_by.is_empty());
		}
		other => panic!("expected a missing binding, got {:?}", other),
	}
}

#[rstest]
fn conflicting_providers_are_rejected() {
	// Arrange
	let builder = ModuleBuilder::new()
		.require::<AuditLog>()
		.bind_instance(AppConfig::test())
		.register_provider(Scope::Singleton, |(_log,): (Arc<AuditLog>,)| {
			AppConfig::test()
		});

	// Act
	let result = builder.build();

	// Assert
	assert!(matches!(result, Err(GraphError::DuplicateProvider { .. })));
}

#[rstest]
fn child_binding_cannot_shadow_parent_type() {
	// Arrange
	let parent: Injector<(AppConfig,)> = Injector::new(
		ModuleBuilder::new()
			.bind_instance(AppConfig::test())
			.build()
			.unwrap(),
	)
	.unwrap();

	// Act
	let result = ModuleBuilder::new()
		.with_parent(&parent)
		.bind_instance(AppConfig::test())
		.build();

	// Assert
	assert!(matches!(result, Err(GraphError::DuplicateProvider { .. })));
}

#[rstest]
fn collection_types_are_not_components() {
	// Act
	let instance = ModuleBuilder::new().bind_instance((1u8, 2u16)).build();
	let argument = ModuleBuilder::new()
		.register_provider(Scope::Singleton, |(_pair,): (Arc<(Clock, Database)>,)| {
			AuditLog::default()
		})
		.build();

	// Assert
	assert!(matches!(
		instance,
		Err(GraphError::InvalidSignature {
			position: "result",
			..
		})
	));
	let err = argument.unwrap_err();
	assert!(matches!(
		err,
		GraphError::InvalidSignature {
			position: "argument",
			..
		}
	));
	assert_eq!(err.kind(), DiagnosticKind::Shape);
}

#[rstest]
fn open_module_cannot_back_an_injector() {
	// Arrange
	let module = storage_module().build().unwrap();

	// Act
	let result = Injector::<(UserRepository,)>::new(module);

	// Assert
	match result {
		Err(GraphError::UnresolvedRequirements { types }) => {
			assert!(types.contains("AppConfig"));
		}
		other => panic!("expected unresolved requirements, got {:?}", other),
	}
}

#[rstest]
fn injector_type_list_must_be_provided() {
	// Arrange
	let module = ModuleBuilder::new().register::<Clock>().build().unwrap();

	// Act
	let result = Injector::<(Clock, UserService)>::new(module);

	// Assert
	let err = result.unwrap_err();
	assert!(matches!(err, GraphError::NotProvided { .. }));
	assert_eq!(err.kind(), DiagnosticKind::Access);
}

#[rstest]
fn first_registration_error_wins() {
	// Arrange
	// Ring registrations would also fail, but later.
	let builder = ModuleBuilder::new()
		.register_provider(
			Scope::NewInstance,
			|(_clock, _limit): (Arc<Clock>, Assisted<u32>)| AuditLog::default(),
		)
		.install(ring());

	// Act
	let err = builder.build().unwrap_err();

	// Assert
	assert!(matches!(err, GraphError::AssistedArgument { .. }));
	assert_eq!(err.kind(), DiagnosticKind::Annotation);
}
