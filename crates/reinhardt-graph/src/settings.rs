//! Assembly settings
//!
//! Settings are usually left at their defaults. They can be loaded from a
//! TOML file:
//!
//! ```toml
//! cycle_detection = "incremental"
//! eager_singletons = true
//! ```

use crate::error::GraphResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How dependency cycles are found while a module is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleDetection {
	/// Walk every edge before merging and report the full cycle path.
	#[default]
	Exhaustive,
	/// Rely on the self-loop check of the incremental merge.
	Incremental,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSettings {
	#[serde(default)]
	pub cycle_detection: CycleDetection,

	/// Construct every singleton as soon as an injector is created.
	#[serde(default)]
	pub eager_singletons: bool,
}

impl GraphSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_cycle_detection(mut self, cycle_detection: CycleDetection) -> Self {
		self.cycle_detection = cycle_detection;
		self
	}

	pub fn with_eager_singletons(mut self, eager_singletons: bool) -> Self {
		self.eager_singletons = eager_singletons;
		self
	}

	/// Parses settings from a TOML document. Missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_graph::{CycleDetection, GraphSettings};
	///
	/// let settings = GraphSettings::from_toml_str("cycle_detection = \"incremental\"").unwrap();
	/// assert_eq!(settings.cycle_detection, CycleDetection::Incremental);
	/// assert!(!settings.eager_singletons);
	/// ```
	pub fn from_toml_str(contents: &str) -> GraphResult<Self> {
		Ok(toml::from_str(contents)?)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> GraphResult<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading graph settings");
		Self::from_toml_str(&contents)
	}
}
