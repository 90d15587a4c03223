//! Configuration types for version gates.

use super::defaults::default_development_versions;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Version requirements for a set of tools.
///
/// Each requirement maps a tool name to a constraint group such as
/// `">=5.4.0"` or `">=6.2.0, <8"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GateConfig {
    /// Tool name to required version constraint, in declaration order
    pub requirements: IndexMap<String, String>,
    /// Version strings reported by builds from source; these pass every check
    pub development_versions: Vec<String>,
    /// Let an empty or unknown resolved version pass
    pub allow_missing: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            requirements: IndexMap::new(),
            development_versions: default_development_versions(),
            allow_missing: false,
        }
    }
}

impl GateConfig {
    /// Create a new `GateConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `GateConfig` builder.
    pub fn builder() -> GateConfigBuilder {
        GateConfigBuilder::default()
    }

    /// Whether `version` is one of the configured development sentinels.
    #[must_use]
    pub fn is_development(&self, version: &str) -> bool {
        let version = version.trim();
        self.development_versions.iter().any(|d| d == version)
    }
}

// ============================================================================
// Builder for GateConfig
// ============================================================================

/// Builder for constructing `GateConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct GateConfigBuilder {
    config: GateConfig,
}

impl GateConfigBuilder {
    /// Add or replace the requirement for `tool`.
    pub fn require(mut self, tool: impl Into<String>, constraint: impl Into<String>) -> Self {
        self.config
            .requirements
            .insert(tool.into(), constraint.into());
        self
    }

    /// Add a development sentinel.
    pub fn development_version(mut self, version: impl Into<String>) -> Self {
        self.config.development_versions.push(version.into());
        self
    }

    /// Allow empty resolved versions to pass.
    pub const fn allow_missing(mut self, allow: bool) -> Self {
        self.config.allow_missing = allow;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> GateConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = GateConfig::builder()
            .require("npm", ">=5.4.0")
            .require("artifactory", ">=6.2.0")
            .development_version("dev")
            .allow_missing(true)
            .build();

        let tools: Vec<&str> = config.requirements.keys().map(String::as_str).collect();
        assert_eq!(tools, vec!["npm", "artifactory"]);
        assert!(config.is_development("development"));
        assert!(config.is_development(" dev "));
        assert!(config.allow_missing);
    }

    #[test]
    fn test_yaml_defaults_fill_missing_fields() {
        let config: GateConfig = serde_yaml::from_str("requirements:\n  go: '>=1.11'\n").unwrap();
        assert_eq!(config.requirements["go"], ">=1.11");
        assert_eq!(config.development_versions, vec!["development".to_string()]);
        assert!(!config.allow_missing);
    }
}
