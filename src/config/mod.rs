//! Configuration module for dotver.
//!
//! This module provides the version gate configuration with:
//! - Type-safe configuration structures
//! - Validation of every requirement
//! - YAML config file loading and discovery
//! - Merging of layered configs
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dotver::config::GateConfig;
//!
//! // Use builder
//! let config = GateConfig::builder()
//!     .require("npm", ">=5.4.0")
//!     .allow_missing(false)
//!     .build();
//!
//! // Load from file
//! use dotver::config::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.dotver.yaml` file in your project root or `~/.config/dotver/`:
//!
//! ```yaml
//! requirements:
//!   npm: ">=5.4.0"
//!   artifactory: ">=6.2.0, <8"
//! development_versions: [development]
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    generate_example_config, generate_full_example_config, DEFAULT_DEVELOPMENT_VERSIONS,
};
pub use types::{GateConfig, GateConfigBuilder};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, find_config_in_dir, load_config_file, load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `GateConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.dotver.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(GateConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
