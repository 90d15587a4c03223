//! Relational version constraints.
//!
//! A constraint is an optional operator followed by a version, e.g.
//! `>=5.4.0`. A bare version means equality. A [`ConstraintGroup`] joins
//! constraints with commas and matches only when all of them hold:
//!
//! ```
//! use dotver::ConstraintGroup;
//!
//! let group: ConstraintGroup = ">=6.2.0, <8".parse().unwrap();
//! assert!(group.matches("7.41.4"));
//! assert!(!group.matches("6.1.9"));
//! assert!(!group.matches("8.0.0"));
//! ```
//!
//! Versions are compared with [`compare_versions`], so the usual padding and
//! suffix rules apply (`<8` excludes `8.0.0` because it equals `8`).

use crate::compare::compare_versions;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing constraint text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("empty constraint in '{0}'")]
    Empty(String),

    #[error("operator '{0}' is not followed by a version")]
    MissingVersion(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}

// ============================================================================
// Operator
// ============================================================================

/// Relational operator between two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    Ge,
    Lt,
    Le,
}

/// Symbols in match order: two-character operators before their prefixes.
const SYMBOLS: &[(&str, Operator)] = &[
    (">=", Operator::Ge),
    ("<=", Operator::Le),
    ("!=", Operator::NotEq),
    ("==", Operator::Eq),
    (">", Operator::Gt),
    ("<", Operator::Lt),
    ("=", Operator::Eq),
];

impl Operator {
    /// Canonical symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// Parse an operator symbol. Accepts `==` as well as `=`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SYMBOLS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, op)| *op)
    }

    /// Whether `a op b` holds given `a.cmp(b)`.
    #[must_use]
    pub const fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => matches!(ordering, Ordering::Equal),
            Self::NotEq => !matches!(ordering, Ordering::Equal),
            Self::Gt => matches!(ordering, Ordering::Greater),
            Self::Ge => !matches!(ordering, Ordering::Less),
            Self::Lt => matches!(ordering, Ordering::Less),
            Self::Le => !matches!(ordering, Ordering::Greater),
        }
    }

    /// Split a leading operator off `text`.
    fn split_prefix(text: &str) -> (Option<Self>, &str) {
        SYMBOLS
            .iter()
            .find(|(s, _)| text.starts_with(s))
            .map_or((None, text), |(s, op)| (Some(*op), &text[s.len()..]))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_symbol(s).ok_or_else(|| ConstraintError::UnknownOperator(s.to_string()))
    }
}

/// Whether `a op b` holds.
#[must_use]
pub fn compare_with(a: &str, b: &str, op: Operator) -> bool {
    op.holds(compare_versions(a, b))
}

// ============================================================================
// Constraint
// ============================================================================

/// A single `operator version` requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub operator: Operator,
    pub version: String,
}

impl Constraint {
    pub fn new(operator: Operator, version: impl Into<String>) -> Self {
        Self {
            operator,
            version: version.into(),
        }
    }

    /// Whether `version` satisfies this constraint.
    #[must_use]
    pub fn matches(&self, version: &str) -> bool {
        compare_with(version, &self.version, self.operator)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConstraintError::Empty(s.to_string()));
        }

        let (operator, rest) = Operator::split_prefix(trimmed);
        let version = rest.trim();

        match operator {
            Some(op) if version.is_empty() => {
                Err(ConstraintError::MissingVersion(op.symbol().to_string()))
            }
            // a leftover operator character, e.g. "=>1.0" or "<>2"
            _ if version.starts_with(['<', '>', '=', '!']) => {
                let symbol: String = trimmed
                    .chars()
                    .take_while(|c| matches!(c, '<' | '>' | '=' | '!'))
                    .collect();
                Err(ConstraintError::UnknownOperator(symbol))
            }
            op => Ok(Self::new(op.unwrap_or(Operator::Eq), version)),
        }
    }
}

// ============================================================================
// ConstraintGroup
// ============================================================================

/// Comma-separated constraints that must all hold.
///
/// An empty group matches every version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintGroup {
    constraints: Vec<Constraint>,
}

impl ConstraintGroup {
    #[must_use]
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    /// A group with no constraints.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether `version` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, version: &str) -> bool {
        self.constraints.iter().all(|c| c.matches(version))
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{constraint}")?;
        }
        Ok(())
    }
}

impl FromStr for ConstraintGroup {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::any());
        }

        let constraints = s
            .split(',')
            .map(|part| {
                if part.trim().is_empty() {
                    Err(ConstraintError::Empty(s.to_string()))
                } else {
                    part.parse()
                }
            })
            .collect::<Result<Vec<Constraint>, _>>()?;

        Ok(Self::new(constraints))
    }
}
