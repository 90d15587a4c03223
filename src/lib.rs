//! **Deterministic ordering of free-form, dot-delimited version strings.**
//!
//! `dotver` orders version identifiers such as `5.10.0`, `1.0.x-SNAPSHOT` or
//! `17.07.0-ce` without requiring semantic-versioning syntax. Missing trailing
//! segments count as zero, numeric segments compare as integers, and
//! anything else falls back to a byte-wise comparison, so every pair of
//! strings has a well-defined answer.
//!
//! ## Core Concepts & Modules
//!
//! - **[`compare`]**: the comparator itself, [`compare_versions`], and its
//!   building blocks (tokenizer, numeral extraction, token ordering).
//! - **[`version`]**: [`Version`], a string newtype ordered by the comparator,
//!   so `Vec<Version>::sort()` does what a person would expect.
//! - **[`constraint`]**: relational operators and comma-separated
//!   [`ConstraintGroup`]s like `>=6.2.0, <8`.
//! - **[`gate`]**: [`VersionGate`] checks resolved tool versions against
//!   configured requirements, tallying outcomes in [`GateStats`].
//! - **[`config`]**: YAML configuration for gates, with discovery and
//!   validation.
//!
//! ## Getting Started
//!
//! ```
//! use std::cmp::Ordering;
//! use dotver::{compare_ordinal, compare_versions, Version};
//!
//! assert_eq!(compare_versions("5.10.0", "5.5.2"), Ordering::Greater);
//! assert_eq!(compare_ordinal("5.0.3", "5.0.20"), -1);
//!
//! let mut versions: Vec<Version> = ["15.5.2", "6.0.2", "6.0"]
//!     .into_iter()
//!     .map(Version::from)
//!     .collect();
//! versions.sort();
//! assert_eq!(versions[0].as_str(), "6.0");
//! ```
//!
//! ### Gating on a minimum version
//!
//! ```
//! use dotver::{GateConfig, GateStats, VersionGate};
//!
//! let config = GateConfig::builder()
//!     .require("npm", ">=5.4.0")
//!     .require("artifactory", ">=6.2.0")
//!     .build();
//! let gate = VersionGate::from_config(&config)?;
//!
//! let stats = GateStats::new();
//! let results = gate.check_all([("npm", "6.14.8"), ("artifactory", "6.1.0")], &stats);
//! assert!(results[0].1.is_allowed());
//! assert!(stats.snapshot().has_failures());
//! # Ok::<(), dotver::Error>(())
//! ```

#![warn(clippy::unwrap_used)]

pub mod compare;
pub mod config;
pub mod constraint;
pub mod error;
pub mod gate;
pub mod version;

// Re-export main types for convenience
pub use compare::{compare_ordinal, compare_versions};
pub use config::{ConfigError, GateConfig, GateConfigBuilder, Validatable};
pub use constraint::{compare_with, Constraint, ConstraintError, ConstraintGroup, Operator};
pub use error::{Error, ErrorContext, Result};
pub use gate::{GateOutcome, GateStats, GateStatsSnapshot, VersionGate};
pub use version::{Version, DEVELOPMENT_VERSION};
