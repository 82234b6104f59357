//! Error types for dependency graph assembly.
//!
//! Every check of the assembly phase is terminal: the first violated
//! contract is reported and no partially validated graph is returned.

use thiserror::Error;

/// Category of a diagnostic, so that a failure can be attributed to the
/// contract it violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
	/// A signature or dependency contains a type-level list where a single
	/// type is required.
	Shape,
	/// An injection annotation does not describe its own type.
	Annotation,
	/// The dependency graph itself is malformed.
	Graph,
	/// An assembled module does not honor the interface it claims.
	InterfaceContract,
	/// A type was requested from a module or injector that does not provide it.
	Access,
	/// Settings could not be loaded.
	Configuration,
}

/// Errors raised while validating or using a dependency graph.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphError {
	/// A type-level list was used as a signature result or argument.
	#[error(
		"Invalid signature shape: `{type_name}` is a type list and cannot be the {position} of a signature. Wrap collections in a dedicated type."
	)]
	InvalidSignature {
		/// Name of the offending type
		type_name: String,
		/// `result` or `argument`
		position: &'static str,
	},

	/// The annotation of a type declares a different result type.
	#[error(
		"The Inject annotation of `{owner}` is not of the form {owner}(Args...): it declares `{declared}`. Maybe the annotation was taken from another type by mistake?"
	)]
	AnnotationMismatch {
		/// Type the annotation belongs to
		owner: String,
		/// Result type declared by the annotation
		declared: String,
	},

	/// The annotated type cannot be constructed from the declared arguments.
	#[error(
		"`{type_name}` contains an Inject annotation but it's not constructible with the specified types ({declared}); its constructor takes ({expected})"
	)]
	NotConstructible {
		type_name: String,
		declared: String,
		expected: String,
	},

	/// A dependency lists its own result type among its requirements.
	#[error("`{type_name}` depends on itself")]
	SelfLoop { type_name: String },

	/// A dependency cycle spanning several types.
	#[error(
		"Circular dependency detected: {type_name}\n  Path: {path}\nThis forms a cycle that cannot be resolved."
	)]
	CircularDependency {
		/// Name of the type where the cycle was closed
		type_name: String,
		/// Circular path (format: A -> B -> C -> A)
		path: String,
	},

	/// More than one binding produces the same type.
	#[error("`{type_name}` is bound more than once")]
	DuplicateProvider { type_name: String },

	/// A requirement is neither bound nor declared as required.
	#[error("No binding for `{type_name}` (required by `{required_by}`)")]
	MissingBinding {
		type_name: String,
		required_by: String,
	},

	/// A dependency has no counterpart in the reference list.
	#[error("The dependency for `{type_name}` has no match in the assembled dependency list")]
	MissingDependency { type_name: String },

	/// The assembled dependency requires more than the declared one.
	#[error(
		"The dependency for `{type_name}` in the assembled module requires {extra}, which the declared interface does not allow"
	)]
	DependencyNotEntailed { type_name: String, extra: String },

	/// The declared interface provides types the assembly does not.
	#[error("The declared interface provides {types}, which the assembled module does not provide")]
	AdditionalProvidedTypes { types: String },

	/// The assembly still requires types the declared interface no longer requires.
	#[error(
		"The assembled module still requires {types}, but the declared interface no longer requires them"
	)]
	UndroppedRequirements { types: String },

	/// A type was requested that is not provided.
	#[error("trying to get an instance of `{type_name}`, but it is not provided by this module")]
	NotProvided { type_name: String },

	/// An injector was requested over a module that still has requirements.
	#[error("The module still requires {types}; bind them before creating an injector")]
	UnresolvedRequirements { types: String },

	/// An assisted argument cannot be resolved from the graph.
	#[error("`{type_name}` is an assisted argument and must be supplied by the caller")]
	AssistedArgument { type_name: String },

	/// A stored instance did not have the expected type.
	#[error("The instance stored for `{type_name}` has an unexpected type")]
	TypeMismatch { type_name: String },

	/// Settings file could not be parsed.
	#[error("Settings error: {0}")]
	Settings(#[from] toml::de::Error),

	/// Settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl GraphError {
	/// The contract this error belongs to.
	pub fn kind(&self) -> DiagnosticKind {
		match self {
			Self::InvalidSignature { .. } => DiagnosticKind::Shape,
			Self::AnnotationMismatch { .. }
			| Self::NotConstructible { .. }
			| Self::AssistedArgument { .. } => DiagnosticKind::Annotation,
			Self::SelfLoop { .. }
			| Self::CircularDependency { .. }
			| Self::DuplicateProvider { .. }
			| Self::MissingBinding { .. }
			| Self::MissingDependency { .. } => DiagnosticKind::Graph,
			Self::DependencyNotEntailed { .. }
			| Self::AdditionalProvidedTypes { .. }
			| Self::UndroppedRequirements { .. }
			| Self::UnresolvedRequirements { .. } => DiagnosticKind::InterfaceContract,
			Self::NotProvided { .. } | Self::TypeMismatch { .. } => DiagnosticKind::Access,
			Self::Settings(_) | Self::Io(_) => DiagnosticKind::Configuration,
		}
	}
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
