//! Default values and example configuration for version gates.

use super::types::GateConfig;
use crate::version::DEVELOPMENT_VERSION;

/// Development sentinels recognized when the config does not list any.
pub const DEFAULT_DEVELOPMENT_VERSIONS: &[&str] = &[DEVELOPMENT_VERSION];

pub(crate) fn default_development_versions() -> Vec<String> {
    DEFAULT_DEVELOPMENT_VERSIONS
        .iter()
        .map(|v| (*v).to_string())
        .collect()
}

/// Generate an example config file content from the default configuration.
#[must_use]
pub fn generate_example_config() -> String {
    let example = GateConfig::builder()
        .require("npm", ">=5.4.0")
        .require("artifactory", ">=6.2.0")
        .build();
    format!(
        r"# dotver version gate configuration
# Place this file at .dotver.yaml in your project root or ~/.config/dotver/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub const fn generate_full_example_config() -> &'static str {
    r#"# dotver version gate configuration
# ===================================
#
# Place this file at:
#   - .dotver.yaml in your project root
#   - ~/.config/dotver/dotver.yaml for global config

# Minimum or ranged versions per tool. Constraints are comma-separated and
# must all hold. Operators: =, ==, !=, >, >=, <, <=. A bare version means =.
requirements:
  npm: ">=5.4.0"
  artifactory: ">=6.2.0, <8"
  docker-api: ">=1.31"

# Versions reported by builds from source. These pass every requirement.
development_versions:
  - development

# Let a tool whose version could not be resolved (empty string) pass.
allow_missing: false
"#
}
