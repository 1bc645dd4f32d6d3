//! Recursive merge of configuration nodes.
//!
//! - Mappings: deep-merge by key
//! - Everything else (scalars, lists, null): overlay wins
//! - A mapping replaced by a scalar (or vice versa) is replaced wholesale

use serde_yaml::{Mapping, Value};

/// Overlay `overlay` on top of `base`.
///
/// Keys keep their position from `base`; keys only in `overlay` are
/// appended in overlay order.
pub fn deep_merge(mut base: Mapping, overlay: Mapping) -> Mapping {
	for (key, overlay_value) in overlay {
		let merged = match (base.get_mut(&key), overlay_value) {
			(Some(Value::Mapping(base_child)), Value::Mapping(overlay_child)) => {
				Value::Mapping(deep_merge(std::mem::take(base_child), overlay_child))
			}
			(_, overlay_value) => overlay_value,
		};
		base.insert(key, merged);
	}
	base
}

/// Merge layers in order (first is base, last has highest precedence).
pub fn merge_layers(layers: Vec<Mapping>) -> Mapping {
	layers.into_iter().fold(Mapping::new(), deep_merge)
}
