use crate::config::merge::merge_layers;
use crate::config::parser::parse_config_file;
use crate::config::types::{ConfigSources, ResolvedConfig, ResolverSettings};
use crate::error::{ModelConfError, Result};
use crate::overrides::{apply_overrides, parse_overrides};
use std::path::{Path, PathBuf};

/// Extensions tried when a config identifier names no existing file.
const CONFIG_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Resolve the effective configuration for `model_name`.
///
/// Steps:
/// 1. Load the shared file `<base_folder>/<common_filename>`
/// 2. Locate the model file, falling back to `<default_filename>` when the
///    model name is a directory
/// 3. Apply `overrides` to the model node
/// 4. Merge the model node over the shared node
/// 5. Re-apply `overrides` so they win over shared values too
///
/// Nothing is returned unless every step succeeds.
pub fn resolve<S: AsRef<str>>(
	model_name: &str,
	overrides: &[S],
	settings: &ResolverSettings,
) -> Result<ResolvedConfig> {
	let common_path = locate_config_file(&settings.base_folder, &settings.common_filename)?;
	let shared = parse_config_file(&common_path)?;
	tracing::debug!(path = %common_path.display(), keys = shared.len(), "loaded shared config");

	let model_path = locate_model_file(settings, model_name)?;
	let mut model = parse_config_file(&model_path)?;
	tracing::debug!(path = %model_path.display(), keys = model.len(), "loaded model config");

	let overrides = parse_overrides(overrides)?;
	apply_overrides(&mut model, &overrides)?;

	let mut merged = merge_layers(vec![shared, model]);
	apply_overrides(&mut merged, &overrides)?;
	tracing::debug!(
		overrides = overrides.len(),
		keys = merged.len(),
		"resolved configuration"
	);

	Ok(ResolvedConfig::new(
		merged,
		ConfigSources {
			common: common_path,
			model: model_path,
		},
	))
}

/// Find the config file for `model_name` under the base folder.
///
/// A directory resolves to its default file; anything else is treated as a
/// config identifier that may omit its extension.
pub fn locate_model_file(settings: &ResolverSettings, model_name: &str) -> Result<PathBuf> {
	let candidate = settings.base_folder.join(model_name);

	if candidate.is_dir() {
		tracing::debug!(dir = %candidate.display(), "model name is a directory");
		return locate_config_file(&candidate, &settings.default_filename);
	}

	locate_config_file(&settings.base_folder, model_name)
}

/// Find `identifier` inside `dir`.
///
/// Tried in order: the literal path, then `<identifier>.yaml`, then
/// `<identifier>.yml`.
pub fn locate_config_file(dir: &Path, identifier: &str) -> Result<PathBuf> {
	let literal = dir.join(identifier);
	if literal.is_file() {
		return Ok(literal);
	}

	CONFIG_EXTENSIONS
		.iter()
		.map(|ext| dir.join(format!("{identifier}.{ext}")))
		.find(|path| path.is_file())
		.ok_or(ModelConfError::ConfigNotFound { path: literal })
}
