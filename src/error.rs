//! Unified error types for dotver.
//!
//! Comparing versions never fails. Errors only come from parsing
//! constraint text, loading configuration and enforcing a version gate.

use crate::constraint::ConstraintError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dotver operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Constraint text could not be parsed
    #[error("Invalid version constraint: {context}")]
    Constraint {
        context: String,
        #[source]
        source: ConstraintError,
    },

    /// A resolved version does not meet its requirement
    #[error("{tool} requires version {required}, found '{found}'")]
    Unsupported {
        tool: String,
        found: String,
        required: String,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenient Result type for dotver operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a constraint error with context
    pub fn constraint(context: impl Into<String>, source: ConstraintError) -> Self {
        Self::Constraint {
            context: context.into(),
            source,
        }
    }

    /// Create an unsupported-version error
    pub fn unsupported(
        tool: impl Into<String>,
        found: impl Into<String>,
        required: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            tool: tool.into(),
            found: found.into(),
            required: required.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<ConstraintError> for Error {
    fn from(err: ConstraintError) -> Self {
        Self::constraint(String::new(), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// ```
/// use dotver::error::{ErrorContext, Result};
/// use dotver::ConstraintGroup;
///
/// fn requirement(tool: &str, text: &str) -> Result<ConstraintGroup> {
///     text.parse::<ConstraintGroup>()
///         .with_context(|| format!("requirement for {tool}"))
/// }
///
/// let err = requirement("npm", ">=").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid version constraint: requirement for npm");
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: Error, new_ctx: &str) -> Error {
    match err {
        Error::Constraint {
            context: existing,
            source,
        } => Error::Constraint {
            context: chain_context(new_ctx, &existing),
            source,
        },
        Error::Io {
            path,
            message,
            source,
        } => Error::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        Error::Config(msg) => Error::Config(chain_context(new_ctx, &msg)),
        other @ Error::Unsupported { .. } => other,
    }
}

/// Chain two context strings as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_chains() {
        let result: std::result::Result<(), ConstraintError> =
            Err(ConstraintError::UnknownOperator("~>".to_string()));
        let err = result
            .context("parsing npm requirement")
            .context("loading gate")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid version constraint: loading gate: parsing npm requirement"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_message() {
        let err = Error::unsupported("npm", "5.3.9", ">=5.4.0");
        insta::assert_snapshot!(err.to_string(), @"npm requires version >=5.4.0, found '5.3.9'");
    }

    #[test]
    fn test_unsupported_ignores_context() {
        let result: Result<()> = Err(Error::unsupported("go", "1.10", ">=1.11"));
        let err = result.context("checking toolchain").unwrap_err();
        assert_eq!(err.to_string(), "go requires version >=1.11, found '1.10'");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = Error::io(
            "/nonexistent/.dotver.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains(".dotver.yaml"));
    }
}
