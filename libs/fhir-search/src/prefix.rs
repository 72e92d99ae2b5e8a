//! Comparison prefixes and value kinds

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a search value, decided by which fields are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchValueKind {
    Number,
    Date,
    String,
    Token,
    Quantity,
    Composite,
}

impl SearchValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchValueKind::Number => "number",
            SearchValueKind::Date => "date",
            SearchValueKind::String => "string",
            SearchValueKind::Token => "token",
            SearchValueKind::Quantity => "quantity",
            SearchValueKind::Composite => "composite",
        }
    }

    /// Whether the kind is ordered, i.e. takes comparison prefixes.
    pub fn is_ordered(&self) -> bool {
        matches!(
            self,
            SearchValueKind::Number | SearchValueKind::Date | SearchValueKind::Quantity
        )
    }
}

impl fmt::Display for SearchValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison prefix for ordered search values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonPrefix {
    /// Equal (default, never written).
    #[default]
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Greater than or equal.
    Ge,
    /// Less than or equal.
    Le,
    /// Starts after.
    Sa,
    /// Ends before.
    Eb,
    /// Approximately equal.
    Ap,
}

impl ComparisonPrefix {
    pub const ALL: [ComparisonPrefix; 9] = [
        ComparisonPrefix::Eq,
        ComparisonPrefix::Ne,
        ComparisonPrefix::Gt,
        ComparisonPrefix::Lt,
        ComparisonPrefix::Ge,
        ComparisonPrefix::Le,
        ComparisonPrefix::Sa,
        ComparisonPrefix::Eb,
        ComparisonPrefix::Ap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonPrefix::Eq => "eq",
            ComparisonPrefix::Ne => "ne",
            ComparisonPrefix::Gt => "gt",
            ComparisonPrefix::Lt => "lt",
            ComparisonPrefix::Ge => "ge",
            ComparisonPrefix::Le => "le",
            ComparisonPrefix::Sa => "sa",
            ComparisonPrefix::Eb => "eb",
            ComparisonPrefix::Ap => "ap",
        }
    }

    /// `eq` is the default and is left out of encoded values.
    pub fn is_implicit(&self) -> bool {
        *self == ComparisonPrefix::Eq
    }

    /// Returns true if this prefix is valid for the given value kind.
    pub fn is_valid_for(&self, kind: SearchValueKind) -> bool {
        match self {
            ComparisonPrefix::Eq => true,
            ComparisonPrefix::Sa | ComparisonPrefix::Eb => kind == SearchValueKind::Date,
            _ => kind.is_ordered(),
        }
    }
}

impl fmt::Display for ComparisonPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonPrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonPrefix::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPrefix(s.to_string()))
    }
}
