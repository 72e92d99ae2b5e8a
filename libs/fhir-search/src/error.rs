//! Error types for search values

use crate::prefix::{ComparisonPrefix, SearchValueKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The populated fields do not form exactly one value kind.
    #[error("Incoherent search value: populated fields [{fields}] do not form a single kind")]
    IncoherentValue { fields: String },

    #[error("Prefix '{prefix}' does not apply to {kind} values")]
    PrefixNotApplicable {
        prefix: ComparisonPrefix,
        kind: SearchValueKind,
    },

    #[error("Unknown search prefix: {0}")]
    UnknownPrefix(String),

    #[error("{0} has no value to search on")]
    Unsearchable(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
