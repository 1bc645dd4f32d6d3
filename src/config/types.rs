use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

/// Where the resolver looks for configuration files.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
	/// Folder containing the shared file and one entry per model.
	pub base_folder: PathBuf,

	/// Shared configuration file, always loaded from `base_folder`.
	pub common_filename: String,

	/// File used when a model name points at a directory.
	pub default_filename: String,
}

impl Default for ResolverSettings {
	fn default() -> Self {
		Self {
			base_folder: PathBuf::from("model"),
			common_filename: "defaults.yaml".to_string(),
			default_filename: "default.yaml".to_string(),
		}
	}
}

/// The files a resolved configuration was built from.
#[derive(Debug, Clone)]
pub struct ConfigSources {
	pub common: PathBuf,
	pub model: PathBuf,
}

/// Result of merging the shared node with the model node and overrides.
///
/// Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	root: Mapping,
	sources: ConfigSources,
}

impl ResolvedConfig {
	pub(crate) fn new(root: Mapping, sources: ConfigSources) -> Self {
		Self { root, sources }
	}

	pub fn as_mapping(&self) -> &Mapping {
		&self.root
	}

	pub fn sources(&self) -> &ConfigSources {
		&self.sources
	}

	/// Look up a value by dotted key path, e.g. `optimizer.lr`.
	pub fn get(&self, dotted_key: &str) -> Option<&Value> {
		let mut segments = dotted_key.split('.');
		let mut current = self.root.get(segments.next()?)?;
		for segment in segments {
			current = current.as_mapping()?.get(segment)?;
		}
		Some(current)
	}

	/// Pick out the well-known top-level parameters.
	pub fn params(&self) -> ModelParams {
		ModelParams::from_mapping(&self.root)
	}
}

/// Well-known top-level parameters echoed after the full configuration.
///
/// There is no schema, so values are kept as written. An absent field is
/// `None` rather than an error; an explicit `null` is also `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelParams {
	pub shared_param: Option<Value>,
	pub learning_rate: Option<Value>,
	pub name: Option<Value>,
	pub layers: Option<Value>,
	pub activation: Option<Value>,

	/// Defaults to `None` when the model does not configure dropout.
	pub dropout: Option<Value>,
}

impl ModelParams {
	fn from_mapping(root: &Mapping) -> Self {
		let field = |key: &str| root.get(key).filter(|value| !value.is_null()).cloned();

		Self {
			shared_param: field("shared_param"),
			learning_rate: field("learning_rate"),
			name: field("name"),
			layers: field("layers"),
			activation: field("activation"),
			dropout: field("dropout"),
		}
	}
}
