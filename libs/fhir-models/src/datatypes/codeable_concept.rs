use crate::builder::{self, Builder, ToBuilder};
use crate::datatypes::Coding;
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::FhirString;
use crate::visitor::{self, Node, Visitable, Visitor};

/// A concept given as codings from one or more systems and/or free text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeableConcept {
    base: ElementBase,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConcept {
    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn coding(&self) -> &[Coding] {
        &self.coding
    }

    pub fn text(&self) -> Option<&FhirString> {
        self.text.as_ref()
    }

    fn has_fields(&self) -> bool {
        !self.coding.is_empty() || self.text.is_some()
    }
}

impl Visitable for CodeableConcept {
    fn as_node(&self) -> Node<'_> {
        Node::CodeableConcept(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_list(&self.coding, "coding", visitor);
        visitor::accept_field(self.text.as_ref(), "text", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableConceptBuilder {
    draft: CodeableConcept,
}

impl CodeableConceptBuilder {
    pub fn coding(mut self, coding: Coding) -> Self {
        self.draft.coding.push(coding);
        self
    }

    pub fn codings(mut self, codings: impl IntoIterator<Item = Coding>) -> Self {
        self.draft.coding.extend(codings);
        self
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.draft.text = Some(text.into());
        self
    }
}

impl Builder for CodeableConceptBuilder {
    type Target = CodeableConcept;

    fn build(self) -> Result<CodeableConcept> {
        builder::require_value_or_children(
            "CodeableConcept",
            false,
            self.draft.has_children(),
        )?;
        Ok(self.draft)
    }
}

impl ToBuilder for CodeableConcept {
    type Builder = CodeableConceptBuilder;

    fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(CodeableConcept, CodeableConceptBuilder => draft.base);
