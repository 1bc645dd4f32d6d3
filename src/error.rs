use std::path::PathBuf;

/// Library-level structured errors for modelconf.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ModelConfError {
	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Config file must contain a mapping at the top level: {path}")]
	ConfigRootNotMapping { path: PathBuf },

	#[error("Invalid override '{expression}': expected key=value with a dotted key path")]
	OverrideSyntax {
		expression: String,
		#[source]
		source: Option<serde_yaml::Error>,
	},

	#[error("Cannot apply override '{expression}': '{key}' is not a mapping")]
	OverrideConflict { expression: String, key: String },

	#[error("Failed to render configuration")]
	RenderError {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Result type alias using ModelConfError.
pub type Result<T> = std::result::Result<T, ModelConfError>;
