use crate::builder::{self, Builder, ToBuilder};
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::{FhirBoolean, FhirString, Uri};
use crate::visitor::{self, Node, Visitable, Visitor};

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coding {
    base: ElementBase,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<FhirString>,
    display: Option<FhirString>,
    user_selected: Option<FhirBoolean>,
}

impl Coding {
    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    pub fn code(&self) -> Option<&FhirString> {
        self.code.as_ref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    pub fn user_selected(&self) -> Option<&FhirBoolean> {
        self.user_selected.as_ref()
    }

    fn has_fields(&self) -> bool {
        self.system.is_some()
            || self.version.is_some()
            || self.code.is_some()
            || self.display.is_some()
            || self.user_selected.is_some()
    }
}

impl Visitable for Coding {
    fn as_node(&self) -> Node<'_> {
        Node::Coding(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.system.as_ref(), "system", visitor);
        visitor::accept_field(self.version.as_ref(), "version", visitor);
        visitor::accept_field(self.code.as_ref(), "code", visitor);
        visitor::accept_field(self.display.as_ref(), "display", visitor);
        visitor::accept_field(self.user_selected.as_ref(), "userSelected", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodingBuilder {
    draft: Coding,
}

impl CodingBuilder {
    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.draft.system = Some(system.into());
        self
    }

    pub fn version(mut self, version: impl Into<FhirString>) -> Self {
        self.draft.version = Some(version.into());
        self
    }

    pub fn code(mut self, code: impl Into<FhirString>) -> Self {
        self.draft.code = Some(code.into());
        self
    }

    pub fn display(mut self, display: impl Into<FhirString>) -> Self {
        self.draft.display = Some(display.into());
        self
    }

    pub fn user_selected(mut self, user_selected: impl Into<FhirBoolean>) -> Self {
        self.draft.user_selected = Some(user_selected.into());
        self
    }
}

impl Builder for CodingBuilder {
    type Target = Coding;

    fn build(self) -> Result<Coding> {
        builder::require_value_or_children("Coding", false, self.draft.has_children())?;
        Ok(self.draft)
    }
}

impl ToBuilder for Coding {
    type Builder = CodingBuilder;

    fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(Coding, CodingBuilder => draft.base);
