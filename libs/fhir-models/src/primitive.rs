//! Primitive values
//!
//! A primitive is a scalar leaf that can still carry an `id` and
//! extensions, e.g. a `string` with a data-absent-reason extension instead
//! of a value.

use crate::builder::{self, Builder, ElementBuilder, ToBuilder};
use crate::datatypes::Extension;
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::visitor::{Node, PrimitiveRef, Visitable, Visitor};
use rust_decimal::Decimal;
use std::fmt;

/// Borrowed view of a primitive's scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    String(&'a str),
    Decimal(&'a Decimal),
    Boolean(bool),
    Integer(i32),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Decimal(d) => write!(f, "{}", d),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
        }
    }
}

/// Rust types that can back a FHIR primitive.
pub trait PrimitiveType: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// FHIR type tag reported to visitors.
    const TYPE_NAME: &'static str;

    fn as_scalar(&self) -> Scalar<'_>;
}

impl PrimitiveType for String {
    const TYPE_NAME: &'static str = "string";

    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::String(self)
    }
}

impl PrimitiveType for Decimal {
    const TYPE_NAME: &'static str = "decimal";

    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Decimal(self)
    }
}

impl PrimitiveType for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Boolean(*self)
    }
}

impl PrimitiveType for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Integer(*self)
    }
}

/// An immutable primitive element.
///
/// `value` is absent only when the element is a pure extension container.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive<T: PrimitiveType> {
    base: ElementBase,
    value: Option<T>,
}

/// string, markdown, uri, canonical, dateTime, ... share the string scalar.
pub type FhirString = Primitive<String>;
pub type Uri = Primitive<String>;
pub type Markdown = Primitive<String>;
pub type DateTime = Primitive<String>;
pub type FhirDecimal = Primitive<Decimal>;
pub type FhirBoolean = Primitive<bool>;
pub type FhirInteger = Primitive<i32>;

impl<T: PrimitiveType> Primitive<T> {
    /// A primitive holding just a value.
    pub fn of(value: impl Into<T>) -> Self {
        Self {
            base: ElementBase::default(),
            value: Some(value.into()),
        }
    }

    pub fn builder() -> PrimitiveBuilder<T> {
        PrimitiveBuilder::default()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl Primitive<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl From<&str> for Primitive<String> {
    fn from(value: &str) -> Self {
        Self::of(value)
    }
}

impl From<String> for Primitive<String> {
    fn from(value: String) -> Self {
        Self::of(value)
    }
}

impl From<Decimal> for Primitive<Decimal> {
    fn from(value: Decimal) -> Self {
        Self::of(value)
    }
}

impl From<bool> for Primitive<bool> {
    fn from(value: bool) -> Self {
        Self::of(value)
    }
}

impl From<i32> for Primitive<i32> {
    fn from(value: i32) -> Self {
        Self::of(value)
    }
}

impl<T: PrimitiveType> Element for Primitive<T> {
    fn id(&self) -> Option<&str> {
        self.base.id()
    }

    fn extension(&self) -> &[Extension] {
        self.base.extension()
    }

    fn has_children(&self) -> bool {
        self.base.has_extension() || self.value.is_some()
    }
}

impl<T: PrimitiveType> Visitable for Primitive<T> {
    fn as_node(&self) -> Node<'_> {
        Node::Primitive(PrimitiveRef {
            type_name: T::TYPE_NAME,
            id: self.base.id(),
            extension: self.base.extension(),
            value: self.value.as_ref().map(PrimitiveType::as_scalar),
        })
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        if let Some(value) = &self.value {
            visitor.visit_scalar("value", value.as_scalar());
        }
    }
}

/// Builder for [`Primitive`].
#[derive(Debug, Clone)]
pub struct PrimitiveBuilder<T: PrimitiveType> {
    base: ElementBase,
    value: Option<T>,
}

impl<T: PrimitiveType> Default for PrimitiveBuilder<T> {
    fn default() -> Self {
        Self {
            base: ElementBase::default(),
            value: None,
        }
    }
}

impl<T: PrimitiveType> PrimitiveBuilder<T> {
    pub fn value(mut self, value: impl Into<T>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl<T: PrimitiveType> Builder for PrimitiveBuilder<T> {
    type Target = Primitive<T>;

    fn build(self) -> Result<Primitive<T>> {
        builder::require_value_or_children(
            T::TYPE_NAME,
            self.value.is_some(),
            self.base.has_extension(),
        )?;
        Ok(Primitive {
            base: self.base,
            value: self.value,
        })
    }
}

impl<T: PrimitiveType> ElementBuilder for PrimitiveBuilder<T> {
    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl<T: PrimitiveType> ToBuilder for Primitive<T> {
    type Builder = PrimitiveBuilder<T>;

    fn to_builder(&self) -> PrimitiveBuilder<T> {
        PrimitiveBuilder {
            base: self.base.clone(),
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn absent_reason() -> Extension {
        Extension::builder()
            .url("http://hl7.org/fhir/StructureDefinition/data-absent-reason")
            .value(FhirString::of("unknown"))
            .build()
            .unwrap()
    }

    #[test]
    fn of_sets_only_the_value() {
        let s = FhirString::of("hello");
        assert_eq!(s.as_str(), Some("hello"));
        assert!(s.id().is_none());
        assert!(s.extension().is_empty());
    }

    #[test]
    fn extension_only_primitive_is_allowed() {
        let s = FhirString::builder()
            .extension(absent_reason())
            .build()
            .unwrap();
        assert!(!s.has_value());
        assert_eq!(s.extension().len(), 1);
    }

    #[test]
    fn empty_primitive_is_rejected() {
        let err = FhirBoolean::builder().id("x").build().unwrap_err();
        assert_eq!(err, Error::NoValueOrChildren { element: "boolean" });
    }

    #[test]
    fn to_builder_round_trips() {
        let original = FhirDecimal::builder()
            .id("d1")
            .value(Decimal::new(125, 1))
            .extension(absent_reason())
            .build()
            .unwrap();
        let copy = original.to_builder().build().unwrap();
        assert_eq!(copy, original);

        let changed = original.to_builder().value(Decimal::ONE).build().unwrap();
        assert_eq!(changed.value(), Some(&Decimal::ONE));
        assert_eq!(original.value(), Some(&Decimal::new(125, 1)));
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::Decimal(&Decimal::new(50, 1)).to_string(), "5.0");
        assert_eq!(Scalar::Boolean(true).to_string(), "true");
        assert_eq!(Scalar::Integer(-3).to_string(), "-3");
    }
}
