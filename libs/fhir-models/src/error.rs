//! Error types for FHIR models

use thiserror::Error;

/// Construction-time failures raised by builders and coded-value factories.
///
/// Every variant signals a caller or data error; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unknown code '{code}' for closed vocabulary {vocabulary}")]
    UnknownCode {
        code: String,
        vocabulary: &'static str,
    },

    #[error("Fields {first} and {second} are mutually exclusive")]
    MutualExclusion {
        first: &'static str,
        second: &'static str,
    },

    #[error("Element {element} must have a value or children")]
    NoValueOrChildren { element: &'static str },

    #[error("Invalid code '{code}': codes must not be empty or contain leading, trailing or repeated whitespace")]
    InvalidCode { code: String },
}

pub type Result<T> = std::result::Result<T, Error>;
