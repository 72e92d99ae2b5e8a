use crate::builder::{self, Builder, ToBuilder};
use crate::datatypes::Identifier;
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::{FhirString, Uri};
use crate::visitor::{self, Node, Visitable, Visitor};

/// A reference from one resource to another, by literal URL, logical
/// identifier or plain display text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reference {
    base: ElementBase,
    reference: Option<FhirString>,
    type_: Option<Uri>,
    identifier: Option<Identifier>,
    display: Option<FhirString>,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    pub fn reference(&self) -> Option<&FhirString> {
        self.reference.as_ref()
    }

    pub fn type_(&self) -> Option<&Uri> {
        self.type_.as_ref()
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    fn has_fields(&self) -> bool {
        self.reference.is_some()
            || self.type_.is_some()
            || self.identifier.is_some()
            || self.display.is_some()
    }
}

impl Visitable for Reference {
    fn as_node(&self) -> Node<'_> {
        Node::Reference(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.reference.as_ref(), "reference", visitor);
        visitor::accept_field(self.type_.as_ref(), "type", visitor);
        visitor::accept_field(self.identifier.as_ref(), "identifier", visitor);
        visitor::accept_field(self.display.as_ref(), "display", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    draft: Reference,
}

impl ReferenceBuilder {
    pub fn reference(mut self, reference: impl Into<FhirString>) -> Self {
        self.draft.reference = Some(reference.into());
        self
    }

    pub fn type_(mut self, type_: impl Into<Uri>) -> Self {
        self.draft.type_ = Some(type_.into());
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.draft.identifier = Some(identifier);
        self
    }

    pub fn display(mut self, display: impl Into<FhirString>) -> Self {
        self.draft.display = Some(display.into());
        self
    }
}

impl Builder for ReferenceBuilder {
    type Target = Reference;

    fn build(self) -> Result<Reference> {
        builder::require_value_or_children("Reference", false, self.draft.has_children())?;
        Ok(self.draft)
    }
}

impl ToBuilder for Reference {
    type Builder = ReferenceBuilder;

    fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(Reference, ReferenceBuilder => draft.base);
