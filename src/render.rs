//! Human-readable output for resolved configurations.

use crate::config::{ModelParams, ResolvedConfig};
use crate::error::{ModelConfError, Result};
use serde_yaml::Value;
use std::fmt::Write;

/// Format of the full configuration block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	#[default]
	Yaml,
	Json,
}

/// Render the full configuration followed by the effective parameters.
pub fn render_report(config: &ResolvedConfig, format: OutputFormat) -> Result<String> {
	let full = render_full(config, format)?;
	let params = render_params(&config.params());

	let mut out = String::new();
	let _ = writeln!(out, "--- Full Configuration ---");
	let _ = writeln!(out, "{}", full.trim_end());
	let _ = writeln!(out, "--- Effective Parameters ---");
	out.push_str(&params);
	Ok(out)
}

/// Render the whole resolved node.
pub fn render_full(config: &ResolvedConfig, format: OutputFormat) -> Result<String> {
	let rendered = match format {
		OutputFormat::Yaml => serde_yaml::to_string(config.as_mapping())
			.map_err(|source| ModelConfError::RenderError {
				source: Box::new(source),
			})?,
		OutputFormat::Json => serde_json::to_string_pretty(config.as_mapping()).map_err(
			|source| ModelConfError::RenderError {
				source: Box::new(source),
			},
		)?,
	};
	Ok(rendered)
}

/// One line per well-known parameter; absent ones print as `null`.
pub fn render_params(params: &ModelParams) -> String {
	let lines = [
		("Shared parameter", &params.shared_param),
		("Learning rate", &params.learning_rate),
		("Name", &params.name),
		("Layers", &params.layers),
		("Activation", &params.activation),
		("Dropout", &params.dropout),
	];

	lines
		.iter()
		.map(|(label, value)| format!("{label}: {}\n", display_value(value.as_ref())))
		.collect()
}

fn display_value(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => "null".to_string(),
		Some(Value::Bool(b)) => b.to_string(),
		Some(Value::Number(n)) => n.to_string(),
		Some(Value::String(s)) => s.clone(),
		Some(other) => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
	}
}
