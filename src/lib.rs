//! modelconf - CLI tool for resolving model configurations.
//!
//! This library provides the core functionality for modelconf, including:
//! - YAML config parsing and model file discovery
//! - Recursive merging of model configs over shared defaults
//! - Command-line `key=value` overrides with dotted key paths
//! - Rendering of the resolved configuration
//!
//! # Example
//!
//! ```no_run
//! use modelconf_cli::config::{ResolverSettings, resolve};
//!
//! let settings = ResolverSettings::default();
//! let config = resolve("model_a", &["learning_rate=0.05"], &settings).unwrap();
//!
//! if let Some(lr) = config.get("learning_rate") {
//!     println!("learning rate: {lr:?}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod overrides;
pub mod render;

pub use error::{ModelConfError, Result};
