use crate::builder::{self, Builder, ToBuilder};
use crate::coded::Code;
use crate::codes::IdentifierUse;
use crate::datatypes::{CodeableConcept, Period, Reference};
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::{FhirString, Uri};
use crate::visitor::{self, Node, Visitable, Visitor};

/// A business identifier: a value unique within its `system` namespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identifier {
    base: ElementBase,
    use_: Option<Code<IdentifierUse>>,
    type_: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    pub fn use_(&self) -> Option<&Code<IdentifierUse>> {
        self.use_.as_ref()
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&FhirString> {
        self.value.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    /// Organization that issued the identifier.
    pub fn assigner(&self) -> Option<&Reference> {
        self.assigner.as_deref()
    }

    fn has_fields(&self) -> bool {
        self.use_.is_some()
            || self.type_.is_some()
            || self.system.is_some()
            || self.value.is_some()
            || self.period.is_some()
            || self.assigner.is_some()
    }
}

impl Visitable for Identifier {
    fn as_node(&self) -> Node<'_> {
        Node::Identifier(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.use_.as_ref(), "use", visitor);
        visitor::accept_field(self.type_.as_ref(), "type", visitor);
        visitor::accept_field(self.system.as_ref(), "system", visitor);
        visitor::accept_field(self.value.as_ref(), "value", visitor);
        visitor::accept_field(self.period.as_ref(), "period", visitor);
        visitor::accept_field(self.assigner.as_deref(), "assigner", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierBuilder {
    draft: Identifier,
}

impl IdentifierBuilder {
    pub fn use_(mut self, use_: impl Into<Code<IdentifierUse>>) -> Self {
        self.draft.use_ = Some(use_.into());
        self
    }

    pub fn use_code(mut self, code: &str) -> Result<Self> {
        self.draft.use_ = Some(Code::of(code)?);
        Ok(self)
    }

    pub fn type_(mut self, type_: CodeableConcept) -> Self {
        self.draft.type_ = Some(type_);
        self
    }

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.draft.system = Some(system.into());
        self
    }

    pub fn value(mut self, value: impl Into<FhirString>) -> Self {
        self.draft.value = Some(value.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.draft.period = Some(period);
        self
    }

    pub fn assigner(mut self, assigner: Reference) -> Self {
        self.draft.assigner = Some(Box::new(assigner));
        self
    }
}

impl Builder for IdentifierBuilder {
    type Target = Identifier;

    fn build(self) -> Result<Identifier> {
        builder::require_value_or_children("Identifier", false, self.draft.has_children())?;
        Ok(self.draft)
    }
}

impl ToBuilder for Identifier {
    type Builder = IdentifierBuilder;

    fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(Identifier, IdentifierBuilder => draft.base);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigner_nests_a_reference() {
        let id = Identifier::builder()
            .use_(IdentifierUse::Official)
            .system("urn:oid:2.16.840.1.113883.2.4.6.3")
            .value("738472983")
            .assigner(Reference::builder().display("Gemeente Amsterdam").build().unwrap())
            .build()
            .unwrap();
        assert_eq!(
            id.assigner()
                .and_then(|r| r.display())
                .and_then(|d| d.as_str()),
            Some("Gemeente Amsterdam")
        );
        assert_eq!(id.use_().and_then(|u| u.member()), Some(IdentifierUse::Official));
    }

    #[test]
    fn use_code_is_checked() {
        assert!(Identifier::builder().use_code("official").is_ok());
        assert!(Identifier::builder().use_code("Official").is_err());
    }
}
