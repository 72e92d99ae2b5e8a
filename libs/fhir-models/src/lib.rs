//! Typed FHIR elements
//!
//! Immutable, extensible FHIR element values whose primitive leaves can be
//! bound to controlled vocabularies.
//!
//! # Module Organization
//!
//! - `primitive`: scalar leaves (`string`, `decimal`, `boolean`, ...)
//! - `coded`: [`Code<V>`], a `code` bound to a vocabulary enum
//! - `codes`: the vocabularies used by the shipped datatypes
//! - `datatypes`: composite datatypes (`Coding`, `Quantity`, `Identifier`, ...)
//! - `builder`: the validating builder protocol
//! - `visitor`: uniform pre-order traversal of any node
//! - `json`: FHIR JSON rendering on top of the visitor
//!
//! # Example
//!
//! ```rust
//! use ferrum_models::prelude::*;
//! use ferrum_models::codes::AdministrativeGender;
//! use ferrum_models::datatypes::Quantity;
//! use ferrum_models::Code;
//! use rust_decimal::Decimal;
//!
//! let gender = Code::<AdministrativeGender>::of("female").unwrap();
//! assert_eq!(gender.member(), Some(AdministrativeGender::Female));
//! assert!(Code::<AdministrativeGender>::of("FEMALE").is_err());
//!
//! let dose = Quantity::builder()
//!     .value(Decimal::from(5))
//!     .system("http://unitsofmeasure.org")
//!     .code("mg")
//!     .build()
//!     .unwrap();
//! let json = ferrum_models::json::to_json_value(&dose);
//! assert_eq!(json["code"], "mg");
//! ```

pub mod builder;
pub mod coded;
pub mod codes;
pub mod datatypes;
pub mod element;
pub mod error;
pub mod json;
pub mod primitive;
pub mod visitor;

pub use builder::{Builder, ElementBuilder, ToBuilder};
pub use coded::{Code, CodeBuilder, Vocabulary, VocabularyDescriptor};
pub use element::{Element, ElementBase};
pub use error::{Error, Result};
pub use primitive::{
    DateTime, FhirBoolean, FhirDecimal, FhirInteger, FhirString, Markdown, Primitive, Scalar, Uri,
};
pub use visitor::{Node, Visitable, Visitor};

/// Traits needed to build, read and traverse model values.
pub mod prelude {
    pub use crate::builder::{Builder, ElementBuilder, ToBuilder};
    pub use crate::coded::Vocabulary;
    pub use crate::element::Element;
    pub use crate::visitor::{Visitable, Visitor};
}
