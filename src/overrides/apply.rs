use crate::error::{ModelConfError, Result};
use crate::overrides::parser::{Override, OverrideAction};
use serde_yaml::{Mapping, Value};

/// Apply overrides to `root` in the order given.
pub fn apply_overrides(root: &mut Mapping, overrides: &[Override]) -> Result<()> {
	for item in overrides {
		apply_override(root, item)?;
	}
	Ok(())
}

/// Apply a single override.
///
/// Missing parents are created as empty mappings. Deleting an absent key
/// is a no-op.
pub fn apply_override(root: &mut Mapping, item: &Override) -> Result<()> {
	let Some((leaf, parents)) = item.path.split_last() else {
		return Ok(());
	};

	let mut node = root;
	for (depth, segment) in parents.iter().enumerate() {
		let key = Value::String(segment.clone());
		if !node.contains_key(&key) {
			if item.action == OverrideAction::Delete {
				return Ok(());
			}
			node.insert(key.clone(), Value::Mapping(Mapping::new()));
		}

		node = match node.get_mut(&key) {
			Some(Value::Mapping(child)) => child,
			_ => {
				return Err(ModelConfError::OverrideConflict {
					expression: item.expression.clone(),
					key: item.path[..=depth].join("."),
				});
			}
		};
	}

	let leaf = Value::String(leaf.clone());
	match &item.action {
		OverrideAction::Assign(value) => {
			node.insert(leaf, value.clone());
		}
		OverrideAction::Delete => {
			if node.remove(&leaf).is_none() {
				tracing::debug!(key = %item.key(), "delete override matched no key");
			}
		}
	}
	Ok(())
}
