use crate::builder::{self, Builder, ToBuilder};
use crate::coded::Code;
use crate::codes::QuantityComparator;
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::{FhirDecimal, FhirString, Uri};
use crate::visitor::{self, Node, Visitable, Visitor};

/// A measured amount, optionally coded in a unit system such as UCUM.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quantity {
    base: ElementBase,
    value: Option<FhirDecimal>,
    comparator: Option<Code<QuantityComparator>>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<FhirString>,
}

impl Quantity {
    pub fn builder() -> QuantityBuilder {
        QuantityBuilder::default()
    }

    pub fn value(&self) -> Option<&FhirDecimal> {
        self.value.as_ref()
    }

    pub fn comparator(&self) -> Option<&Code<QuantityComparator>> {
        self.comparator.as_ref()
    }

    /// Human readable unit.
    pub fn unit(&self) -> Option<&FhirString> {
        self.unit.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    /// Coded form of the unit.
    pub fn code(&self) -> Option<&FhirString> {
        self.code.as_ref()
    }

    fn has_fields(&self) -> bool {
        self.value.is_some()
            || self.comparator.is_some()
            || self.unit.is_some()
            || self.system.is_some()
            || self.code.is_some()
    }
}

impl Visitable for Quantity {
    fn as_node(&self) -> Node<'_> {
        Node::Quantity(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.value.as_ref(), "value", visitor);
        visitor::accept_field(self.comparator.as_ref(), "comparator", visitor);
        visitor::accept_field(self.unit.as_ref(), "unit", visitor);
        visitor::accept_field(self.system.as_ref(), "system", visitor);
        visitor::accept_field(self.code.as_ref(), "code", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder {
    draft: Quantity,
}

impl QuantityBuilder {
    pub fn value(mut self, value: impl Into<FhirDecimal>) -> Self {
        self.draft.value = Some(value.into());
        self
    }

    pub fn comparator(mut self, comparator: impl Into<Code<QuantityComparator>>) -> Self {
        self.draft.comparator = Some(comparator.into());
        self
    }

    /// Set the comparator from its wire form (`<`, `<=`, `>=`, `>`).
    pub fn comparator_code(mut self, code: &str) -> Result<Self> {
        self.draft.comparator = Some(Code::of(code)?);
        Ok(self)
    }

    pub fn unit(mut self, unit: impl Into<FhirString>) -> Self {
        self.draft.unit = Some(unit.into());
        self
    }

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.draft.system = Some(system.into());
        self
    }

    pub fn code(mut self, code: impl Into<FhirString>) -> Self {
        self.draft.code = Some(code.into());
        self
    }
}

impl Builder for QuantityBuilder {
    type Target = Quantity;

    fn build(self) -> Result<Quantity> {
        let q = &self.draft;
        builder::require_value_or_children("Quantity", false, q.has_children())?;
        // qty-3: a coded unit needs its system
        builder::require_if(q.code.is_some(), q.system.is_some(), "Quantity.system")?;
        Ok(self.draft)
    }
}

impl ToBuilder for Quantity {
    type Builder = QuantityBuilder;

    fn to_builder(&self) -> QuantityBuilder {
        QuantityBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(Quantity, QuantityBuilder => draft.base);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal::Decimal;

    #[test]
    fn coded_unit_requires_system() {
        let err = Quantity::builder()
            .value(Decimal::from(5))
            .code("mg")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                field: "Quantity.system"
            }
        );
    }

    #[test]
    fn comparator_setters() {
        let by_member = Quantity::builder()
            .value(Decimal::from(10))
            .comparator(QuantityComparator::GreaterOrEqual)
            .build()
            .unwrap();
        let by_code = Quantity::builder()
            .value(Decimal::from(10))
            .comparator_code(">=")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(by_member, by_code);
        assert_eq!(
            by_member.comparator().and_then(|c| c.member()),
            Some(QuantityComparator::GreaterOrEqual)
        );

        let err = Quantity::builder().comparator_code("=>").unwrap_err();
        assert!(matches!(err, Error::UnknownCode { .. }));
    }
}
