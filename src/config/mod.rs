//! Configuration loading and resolution for modelconf.
//!
//! This module handles:
//! - YAML config file parsing
//! - Model file discovery with directory fallback
//! - Merging model configs over shared defaults

pub mod merge;
pub mod parser;
pub mod resolver;
pub mod types;

pub use merge::{deep_merge, merge_layers};
pub use parser::{parse_config_file, parse_config_slice, parse_config_str};
pub use resolver::{locate_config_file, locate_model_file, resolve};
pub use types::{ConfigSources, ModelParams, ResolvedConfig, ResolverSettings};
