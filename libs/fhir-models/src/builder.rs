//! Validating builder protocol
//!
//! Every model node is produced by a builder: setters accumulate fields,
//! `build()` checks the declared invariants once and hands back an immutable
//! value. Checks fail fast on the first violation.
//!
//! The helpers in this module are the building blocks each `build()` uses,
//! so that all types report violations the same way.

use crate::datatypes::Extension;
use crate::element::ElementBase;
use crate::error::{Error, Result};
use tracing::debug;

/// A single-owner scratch object that produces an immutable `Target`.
pub trait Builder: Sized {
    type Target;

    /// Validate the accumulated fields and produce the value.
    fn build(self) -> Result<Self::Target>;
}

/// Re-derive a builder from an existing value ("copy and modify").
///
/// Implementations must copy every field, extension order included, so that
/// `x.to_builder().build() == Ok(x)`.
pub trait ToBuilder {
    type Builder: Builder<Target = Self>;

    fn to_builder(&self) -> Self::Builder;
}

/// Setters for the fields shared by all elements, provided once for every
/// builder through composition with [`ElementBase`].
pub trait ElementBuilder: Builder {
    fn base_mut(&mut self) -> &mut ElementBase;

    fn id(mut self, id: impl Into<String>) -> Self {
        self.base_mut().id = Some(id.into());
        self
    }

    /// Append one extension; order is preserved.
    fn extension(mut self, extension: Extension) -> Self {
        self.base_mut().extension.push(extension);
        self
    }

    fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.base_mut().extension.extend(extensions);
        self
    }
}

pub(crate) fn reject<T>(err: Error) -> Result<T> {
    debug!(error = %err, "rejected model construction");
    Err(err)
}

/// Require a field declared with minimum cardinality 1.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => reject(Error::MissingRequiredField { field }),
    }
}

/// Require `field` whenever `condition` holds.
pub fn require_if(condition: bool, present: bool, field: &'static str) -> Result<()> {
    if condition && !present {
        return reject(Error::MissingRequiredField { field });
    }
    Ok(())
}

/// Two sibling fields that must not both be populated.
pub fn exclusive(first: (&'static str, bool), second: (&'static str, bool)) -> Result<()> {
    if first.1 && second.1 {
        return reject(Error::MutualExclusion {
            first: first.0,
            second: second.0,
        });
    }
    Ok(())
}

/// Every element needs a value or at least one child (`ele-1`).
pub fn require_value_or_children(
    element: &'static str,
    has_value: bool,
    has_children: bool,
) -> Result<()> {
    if !has_value && !has_children {
        return reject(Error::NoValueOrChildren { element });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_field_name() {
        let err = require::<u8>(None, "Extension.url").unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                field: "Extension.url"
            }
        );
        assert_eq!(require(Some(3), "x").unwrap(), 3);
    }

    #[test]
    fn exclusive_allows_one_side() {
        assert!(exclusive(("a", true), ("b", false)).is_ok());
        assert!(exclusive(("a", false), ("b", false)).is_ok());
        assert_eq!(
            exclusive(("a", true), ("b", true)).unwrap_err(),
            Error::MutualExclusion {
                first: "a",
                second: "b"
            }
        );
    }

    #[test]
    fn value_or_children() {
        assert!(require_value_or_children("Coding", false, true).is_ok());
        assert!(require_value_or_children("Coding", true, false).is_ok());
        assert!(matches!(
            require_value_or_children("Coding", false, false),
            Err(Error::NoValueOrChildren { element: "Coding" })
        ));
    }

    #[test]
    fn conditional_requirement() {
        assert!(require_if(false, false, "Quantity.system").is_ok());
        assert!(require_if(true, true, "Quantity.system").is_ok());
        assert!(require_if(true, false, "Quantity.system").is_err());
    }
}
