//! Command-line overrides for resolved configurations.
//!
//! This module handles:
//! - Parsing `key=value` tokens with dotted key paths
//! - Applying them as point mutations to a configuration node

pub mod apply;
pub mod parser;

pub use apply::{apply_override, apply_overrides};
pub use parser::{Override, OverrideAction, parse_overrides};
