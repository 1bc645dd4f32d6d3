use crate::error::{ModelConfError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Parse a config file from the given path.
///
/// Only I/O failures are read errors; undecodable content is a parse error.
pub fn parse_config_file(path: &Path) -> Result<Mapping> {
	let content = std::fs::read(path).map_err(|source| ModelConfError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_slice(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Mapping> {
	parse_config_slice(content.as_bytes(), path)
}

/// Parse a config from raw file content.
///
/// An empty document is an empty node; any other non-mapping root is rejected.
pub fn parse_config_slice(content: &[u8], path: &Path) -> Result<Mapping> {
	if std::str::from_utf8(content).is_ok_and(is_blank_document) {
		return Ok(Mapping::new());
	}

	let value: Value =
		serde_yaml::from_slice(content).map_err(|source| ModelConfError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	match value {
		Value::Mapping(mapping) => Ok(mapping),
		Value::Null => Ok(Mapping::new()),
		_ => Err(ModelConfError::ConfigRootNotMapping {
			path: path.to_path_buf(),
		}),
	}
}

fn is_blank_document(content: &str) -> bool {
	content.lines().all(|line| {
		let line = line.trim();
		line.is_empty() || line.starts_with('#') || line == "---"
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.yaml");

		assert!(parse_config_str("", &path).unwrap().is_empty());
		assert!(
			parse_config_str("# only a comment\n---\n", &path)
				.unwrap()
				.is_empty()
		);
	}

	#[test]
	fn test_parse_basic_config() {
		let content = r#"
name: a
layers: 3
activation: relu
learning_rate: 0.02
"#;
		let path = PathBuf::from("model_a.yaml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.len(), 4);
		assert_eq!(config.get("name").and_then(Value::as_str), Some("a"));
		assert_eq!(config.get("layers").and_then(Value::as_u64), Some(3));
		assert_eq!(
			config.get("learning_rate").and_then(Value::as_f64),
			Some(0.02)
		);
	}

	#[test]
	fn test_parse_preserves_key_order() {
		let content = "zeta: 1\nalpha: 2\nmid: 3\n";
		let config = parse_config_str(content, Path::new("order.yaml")).unwrap();

		let keys: Vec<_> = config.keys().filter_map(Value::as_str).collect();
		assert_eq!(keys, ["zeta", "alpha", "mid"]);
	}

	#[test]
	fn test_parse_nested_config() {
		let content = r#"
optimizer:
  kind: adam
  betas: [0.9, 0.999]
"#;
		let config = parse_config_str(content, Path::new("nested.yaml")).unwrap();
		let optimizer = config.get("optimizer").and_then(Value::as_mapping).unwrap();

		assert_eq!(optimizer.get("kind").and_then(Value::as_str), Some("adam"));
		assert_eq!(
			optimizer
				.get("betas")
				.and_then(Value::as_sequence)
				.map(Vec::len),
			Some(2)
		);
	}

	#[test]
	fn test_parse_invalid_yaml() {
		let path = PathBuf::from("broken.yaml");
		let result = parse_config_str("name: [unclosed\n", &path);

		match result.unwrap_err() {
			ModelConfError::ConfigParseError { path: err_path, .. } => {
				assert_eq!(err_path, path);
			}
			other => panic!("Expected ConfigParseError, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_non_mapping_root() {
		let path = PathBuf::from("list.yaml");

		for content in ["- a\n- b\n", "just a string\n", "42\n"] {
			match parse_config_str(content, &path).unwrap_err() {
				ModelConfError::ConfigRootNotMapping { path: err_path } => {
					assert_eq!(err_path, path);
				}
				other => panic!("Expected ConfigRootNotMapping, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_parse_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("absent.yaml");

		match parse_config_file(&path).unwrap_err() {
			ModelConfError::ConfigReadError { path: err_path, .. } => {
				assert_eq!(err_path, path);
			}
			other => panic!("Expected ConfigReadError, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_non_utf8_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("defaults.yaml");
		std::fs::write(&path, b"a: \xff\xfe\n").unwrap();

		match parse_config_file(&path).unwrap_err() {
			ModelConfError::ConfigParseError { path: err_path, .. } => {
				assert_eq!(err_path, path);
			}
			other => panic!("Expected ConfigParseError, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_config_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("defaults.yaml");
		std::fs::write(&path, "shared_param: 1\nlearning_rate: 0.01\n").unwrap();

		let config = parse_config_file(&path).unwrap();
		assert_eq!(config.get("shared_param").and_then(Value::as_i64), Some(1));
	}
}
