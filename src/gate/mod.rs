//! Version gates: named requirements checked against resolved versions.
//!
//! A [`VersionGate`] is compiled from a [`GateConfig`]. Callers resolve a
//! tool's version (from its `--version` output, a server API, ...) and ask
//! the gate whether that version may be used:
//!
//! ```
//! use dotver::{GateConfig, GateOutcome, VersionGate};
//!
//! let config = GateConfig::builder().require("npm", ">=5.4.0").build();
//! let gate = VersionGate::from_config(&config).unwrap();
//!
//! assert_eq!(gate.check("npm", "6.14.8"), GateOutcome::Satisfied);
//! assert!(gate.require("npm", "5.3.0").is_err());
//! assert!(gate.check("npm", "development").is_allowed());
//! ```

mod stats;

pub use stats::{GateStats, GateStatsSnapshot};

use crate::config::GateConfig;
use crate::constraint::ConstraintGroup;
use crate::error::{Error, ErrorContext, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of checking one resolved version against its requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GateOutcome {
    /// No requirement exists for the tool
    Unconstrained,
    /// The version meets the requirement
    Satisfied,
    /// The version is a build from source
    Development,
    /// The version is empty; `allowed` reflects the gate configuration
    MissingVersion { allowed: bool },
    /// The version does not meet the requirement
    Unsatisfied { required: String },
}

impl GateOutcome {
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        match self {
            Self::Unconstrained | Self::Satisfied | Self::Development => true,
            Self::MissingVersion { allowed } => *allowed,
            Self::Unsatisfied { .. } => false,
        }
    }
}

/// Compiled version requirements.
#[derive(Debug, Clone, Default)]
pub struct VersionGate {
    requirements: IndexMap<String, ConstraintGroup>,
    development_versions: Vec<String>,
    allow_missing: bool,
}

impl VersionGate {
    /// Compile every requirement of `config`.
    pub fn from_config(config: &GateConfig) -> Result<Self> {
        let requirements = config
            .requirements
            .iter()
            .map(|(tool, text)| {
                let group = text
                    .parse::<ConstraintGroup>()
                    .with_context(|| format!("requirement for '{tool}'"))?;
                Ok((tool.clone(), group))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        Ok(Self {
            requirements,
            development_versions: config.development_versions.clone(),
            allow_missing: config.allow_missing,
        })
    }

    /// Load a config file and compile it.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let config = crate::config::load_config_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        Self::from_config(&config)
    }

    /// Load the discovered config file (or defaults) and compile it.
    pub fn discover(explicit_path: Option<&std::path::Path>) -> Result<Self> {
        let (config, loaded_from) = crate::config::load_or_default(explicit_path);
        match loaded_from {
            Some(path) => tracing::debug!("Using version requirements from {}", path.display()),
            None => tracing::debug!("No version requirements file found, using defaults"),
        }
        Self::from_config(&config)
    }

    /// The requirement for `tool`, if any.
    #[must_use]
    pub fn requirement(&self, tool: &str) -> Option<&ConstraintGroup> {
        self.requirements.get(tool)
    }

    /// Check a resolved version of `tool`.
    #[must_use]
    pub fn check(&self, tool: &str, found: &str) -> GateOutcome {
        let Some(required) = self.requirements.get(tool) else {
            return GateOutcome::Unconstrained;
        };

        let trimmed = found.trim();
        let outcome = if trimmed.is_empty() {
            GateOutcome::MissingVersion {
                allowed: self.allow_missing,
            }
        } else if self.development_versions.iter().any(|d| d == trimmed) {
            GateOutcome::Development
        } else if required.matches(found) {
            GateOutcome::Satisfied
        } else {
            GateOutcome::Unsatisfied {
                required: required.to_string(),
            }
        };

        tracing::debug!(tool, found, required = %required, ?outcome, "Checked version");
        outcome
    }

    /// Check a resolved version of `tool`, failing if it is not allowed.
    pub fn require(&self, tool: &str, found: &str) -> Result<()> {
        let outcome = self.check(tool, found);
        if outcome.is_allowed() {
            return Ok(());
        }

        let required = self
            .requirements
            .get(tool)
            .map(ToString::to_string)
            .unwrap_or_default();
        tracing::warn!("{} version '{}' does not meet {}", tool, found, required);
        Err(Error::unsupported(tool, found, required))
    }

    /// Check every `(tool, version)` pair, recording each outcome in `stats`.
    pub fn check_all<I, T, V>(&self, versions: I, stats: &GateStats) -> Vec<(String, GateOutcome)>
    where
        I: IntoIterator<Item = (T, V)>,
        T: AsRef<str>,
        V: AsRef<str>,
    {
        versions
            .into_iter()
            .map(|(tool, found)| {
                let tool = tool.as_ref();
                let outcome = self.check(tool, found.as_ref());
                stats.record(&outcome);
                (tool.to_string(), outcome)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> VersionGate {
        let config = GateConfig::builder()
            .require("npm", ">=5.4.0")
            .require("artifactory", ">=6.2.0, <8")
            .build();
        VersionGate::from_config(&config).unwrap()
    }

    #[test]
    fn test_check_outcomes() {
        let gate = gate();
        assert_eq!(gate.check("npm", "5.4.0"), GateOutcome::Satisfied);
        assert_eq!(gate.check("npm", "5.10.1"), GateOutcome::Satisfied);
        assert_eq!(
            gate.check("npm", "5.3.9"),
            GateOutcome::Unsatisfied {
                required: ">=5.4.0".to_string()
            }
        );
        assert_eq!(gate.check("yarn", "1.0"), GateOutcome::Unconstrained);
        assert_eq!(gate.check("npm", " development "), GateOutcome::Development);
        assert_eq!(
            gate.check("npm", ""),
            GateOutcome::MissingVersion { allowed: false }
        );
    }

    #[test]
    fn test_range_requirement() {
        let gate = gate();
        assert!(gate.check("artifactory", "7.41.4").is_allowed());
        assert!(!gate.check("artifactory", "8.0").is_allowed());
        assert!(!gate.check("artifactory", "6.1.x-SNAPSHOT").is_allowed());
    }

    #[test]
    fn test_allow_missing() {
        let config = GateConfig::builder()
            .require("docker-api", ">=1.31")
            .allow_missing(true)
            .build();
        let gate = VersionGate::from_config(&config).unwrap();
        assert!(gate.check("docker-api", "  ").is_allowed());
        assert!(gate.require("docker-api", "").is_ok());
    }

    #[test]
    fn test_from_missing_file() {
        let err = VersionGate::from_file(std::path::Path::new("/nonexistent/.dotver.yaml"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Invalid configuration: loading /nonexistent"));
    }

    #[test]
    fn test_require_error() {
        let err = gate().require("npm", "5.3.9").unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
        assert_eq!(err.to_string(), "npm requires version >=5.4.0, found '5.3.9'");
    }

    #[test]
    fn test_invalid_requirement_names_tool() {
        let config = GateConfig::builder().require("go", ">=").build();
        let err = VersionGate::from_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid version constraint: requirement for 'go'"
        );
    }

    #[test]
    fn test_check_all_records_stats() {
        let gate = gate();
        let stats = GateStats::new();
        let results = gate.check_all(
            [("npm", "6.14.8"), ("artifactory", "5.0"), ("gradle", "7.6")],
            &stats,
        );

        assert_eq!(results.len(), 3);
        assert_eq!(results[1].0, "artifactory");
        assert!(!results[1].1.is_allowed());

        let snapshot = stats.snapshot();
        assert_eq!((snapshot.success, snapshot.failure, snapshot.total), (2, 1, 3));
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_value(GateOutcome::Unsatisfied {
            required: ">=1".to_string(),
        })
        .unwrap();
        assert_eq!(json["outcome"], "unsatisfied");
        assert_eq!(json["required"], ">=1");
    }
}
