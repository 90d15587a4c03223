//! A version string that orders by [`compare_versions`].

use crate::compare::compare_versions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Version reported by tools built from source.
///
/// A development build is treated as newer than any release.
pub const DEVELOPMENT_VERSION: &str = "development";

/// A free-form version identifier.
///
/// The raw text is kept as given. Ordering and equality follow
/// [`compare_versions`], so `Version::new("1.0") == Version::new("1")`.
/// For that reason `Version` does not implement `Hash`; key maps by
/// [`Version::as_str`] when byte identity is what matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Wrap a version string.
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The raw version text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the version, returning the raw text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Compare against another version string.
    #[must_use]
    pub fn compare(&self, other: &str) -> Ordering {
        compare_versions(&self.0, other)
    }

    /// Whether this is a build from source.
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.0 == DEVELOPMENT_VERSION
    }

    /// Whether this version is `min` or newer.
    ///
    /// Development builds satisfy every minimum.
    #[must_use]
    pub fn at_least(&self, min: &str) -> bool {
        self.is_development() || self.compare(min) != Ordering::Less
    }

    /// Whether the version string is empty or only whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_versions(&self.0, &other.0)
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
