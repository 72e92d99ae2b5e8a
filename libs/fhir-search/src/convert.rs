//! Search values from model datatypes

use crate::error::{Error, Result};
use crate::prefix::ComparisonPrefix;
use crate::value::SearchParameterValue;
use ferrum_models::codes::QuantityComparator;
use ferrum_models::datatypes::{Coding, Identifier, Quantity};
use ferrum_models::{Code, FhirString, Vocabulary};

fn text(value: Option<&FhirString>) -> Option<&str> {
    value.and_then(|v| v.as_str())
}

fn token(system: Option<&str>, code: &str) -> SearchParameterValue {
    match system {
        Some(system) => SearchParameterValue::token(system, code),
        None => SearchParameterValue::code(code),
    }
}

impl From<QuantityComparator> for ComparisonPrefix {
    fn from(comparator: QuantityComparator) -> Self {
        match comparator {
            QuantityComparator::LessThan => ComparisonPrefix::Lt,
            QuantityComparator::LessOrEqual => ComparisonPrefix::Le,
            QuantityComparator::GreaterOrEqual => ComparisonPrefix::Ge,
            QuantityComparator::GreaterThan => ComparisonPrefix::Gt,
        }
    }
}

/// `system|code`, or the bare code when the coding has no system.
impl TryFrom<&Coding> for SearchParameterValue {
    type Error = Error;

    fn try_from(coding: &Coding) -> Result<Self> {
        let code = text(coding.code()).ok_or(Error::Unsearchable("Coding"))?;
        Ok(token(text(coding.system()), code))
    }
}

/// `system|value`, or the bare value when the identifier has no system.
impl TryFrom<&Identifier> for SearchParameterValue {
    type Error = Error;

    fn try_from(identifier: &Identifier) -> Result<Self> {
        let value = text(identifier.value()).ok_or(Error::Unsearchable("Identifier"))?;
        Ok(token(text(identifier.system()), value))
    }
}

/// A quantity value, or a plain number when no unit code is given. The
/// comparator becomes the prefix.
impl TryFrom<&Quantity> for SearchParameterValue {
    type Error = Error;

    fn try_from(quantity: &Quantity) -> Result<Self> {
        let number = quantity
            .value()
            .and_then(|v| v.value())
            .copied()
            .ok_or(Error::Unsearchable("Quantity"))?;
        let value = match text(quantity.code()) {
            Some(code) => SearchParameterValue::quantity(
                number,
                text(quantity.system()).unwrap_or_default(),
                code,
            ),
            None => SearchParameterValue::number(number),
        };
        // An extension-only comparator has no prefix to map to.
        match quantity.comparator() {
            Some(comparator) => {
                let member = comparator.member().ok_or(Error::Unsearchable("Quantity"))?;
                value.with_prefix(member.into())
            }
            None => Ok(value),
        }
    }
}

/// A token in the vocabulary's code system.
impl<V: Vocabulary> TryFrom<&Code<V>> for SearchParameterValue {
    type Error = Error;

    fn try_from(code: &Code<V>) -> Result<Self> {
        let value = code.value().ok_or(Error::Unsearchable("code"))?;
        Ok(SearchParameterValue::token(V::DESCRIPTOR.system, value))
    }
}
