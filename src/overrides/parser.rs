use crate::error::{ModelConfError, Result};
use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

/// Dotted key path: segments of word characters and dashes, joined by `.`.
static KEY_PATH: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?:[A-Za-z_][\w-]*|\d+)(?:\.(?:[A-Za-z_][\w-]*|\d+))*$")
		.expect("key path regex is valid")
});

/// What an override does to the addressed key.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideAction {
	/// Set the key, creating it and any missing parents.
	Assign(Value),

	/// Remove the key if present.
	Delete,
}

/// A parsed command-line override such as `optimizer.lr=0.05`.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
	/// The token as given on the command line, for error messages.
	pub expression: String,

	/// Key path segments, outermost first.
	pub path: Vec<String>,

	pub action: OverrideAction,
}

impl Override {
	/// Parse one override token.
	///
	/// Accepted forms: `key=value`, `+key=value`, `++key=value`, `~key`.
	pub fn parse(expression: &str) -> Result<Self> {
		let syntax_error = || ModelConfError::OverrideSyntax {
			expression: expression.to_string(),
			source: None,
		};

		if let Some(key) = expression.strip_prefix('~') {
			if key.contains('=') {
				return Err(syntax_error());
			}
			return Ok(Override {
				expression: expression.to_string(),
				path: parse_key_path(key).ok_or_else(syntax_error)?,
				action: OverrideAction::Delete,
			});
		}

		let body = expression
			.strip_prefix("++")
			.or_else(|| expression.strip_prefix('+'))
			.unwrap_or(expression);

		let (key, raw_value) = body.split_once('=').ok_or_else(syntax_error)?;
		let path = parse_key_path(key).ok_or_else(syntax_error)?;
		let value = parse_value(raw_value).map_err(|source| ModelConfError::OverrideSyntax {
			expression: expression.to_string(),
			source: Some(source),
		})?;

		Ok(Override {
			expression: expression.to_string(),
			path,
			action: OverrideAction::Assign(value),
		})
	}

	/// The key path joined back into dotted form.
	pub fn key(&self) -> String {
		self.path.join(".")
	}
}

/// Parse every override token, failing on the first malformed one.
pub fn parse_overrides<S: AsRef<str>>(expressions: &[S]) -> Result<Vec<Override>> {
	expressions
		.iter()
		.map(|expression| Override::parse(expression.as_ref()))
		.collect()
}

fn parse_key_path(key: &str) -> Option<Vec<String>> {
	if !KEY_PATH.is_match(key) {
		return None;
	}
	Some(key.split('.').map(str::to_string).collect())
}

/// Values are YAML flow values, so `0.05` is a number and `'0.05'` a string.
fn parse_value(raw: &str) -> std::result::Result<Value, serde_yaml::Error> {
	if raw.trim().is_empty() {
		return Ok(Value::String(raw.to_string()));
	}
	serde_yaml::from_str(raw)
}
