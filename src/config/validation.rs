//! Configuration validation for dotver.

use super::types::GateConfig;
use crate::constraint::ConstraintGroup;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for GateConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (tool, constraint) in &self.requirements {
            if tool.trim().is_empty() {
                errors.push(ConfigError {
                    field: "requirements".to_string(),
                    message: format!("Tool name must not be empty (constraint '{constraint}')"),
                });
            }

            if let Err(e) = constraint.parse::<ConstraintGroup>() {
                errors.push(ConfigError {
                    field: format!("requirements.{tool}"),
                    message: e.to_string(),
                });
            }
        }

        for (i, sentinel) in self.development_versions.iter().enumerate() {
            if sentinel.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("development_versions[{i}]"),
                    message: "Development version must not be empty".to_string(),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GateConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_constraint_names_tool() {
        let config = GateConfig::builder()
            .require("npm", ">=5.4.0")
            .require("go", "=>1.11")
            .build();

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "requirements.go");
        assert_eq!(errors[0].message, "unknown operator '=>'");
    }

    #[test]
    fn test_empty_names_and_sentinels() {
        let config = GateConfig::builder()
            .require(" ", ">=1")
            .development_version("")
            .build();

        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["requirements", "development_versions[1]"]);
    }
}
