//! FHIR search parameter values
//!
//! A [`SearchParameterValue`] holds exactly one kind of value (number,
//! date, string, token, quantity or composite) and an optional
//! [`ComparisonPrefix`], and encodes to the single-token wire form used in
//! search URLs:
//!
//! ```rust
//! use ferrum_search::{ComparisonPrefix, SearchParameterValue};
//! use rust_decimal::Decimal;
//!
//! let dose = SearchParameterValue::quantity(Decimal::from(5), "http://unitsofmeasure.org", "mg")
//!     .with_prefix(ComparisonPrefix::Ge)
//!     .unwrap();
//! assert_eq!(dose.encode(), "ge5|http://unitsofmeasure.org|mg");
//! ```
//!
//! Values are checked when built: fields that do not form one kind, or a
//! prefix that does not apply to the kind, are rejected. Encoding itself
//! cannot fail.

pub mod convert;
pub mod encode;
pub mod error;
pub mod prefix;
pub mod value;

pub use encode::EncodeOptions;
pub use error::{Error, Result};
pub use prefix::{ComparisonPrefix, SearchValueKind};
pub use value::{SearchParameterValue, SearchParameterValueBuilder};
