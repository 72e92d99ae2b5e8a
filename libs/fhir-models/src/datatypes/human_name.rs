use crate::builder::{self, Builder, ToBuilder};
use crate::coded::Code;
use crate::codes::NameUse;
use crate::datatypes::Period;
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::FhirString;
use crate::visitor::{self, Node, Visitable, Visitor};

/// A person's name with its parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HumanName {
    base: ElementBase,
    use_: Option<Code<NameUse>>,
    text: Option<FhirString>,
    family: Option<FhirString>,
    given: Vec<FhirString>,
    prefix: Vec<FhirString>,
    suffix: Vec<FhirString>,
    period: Option<Period>,
}

impl HumanName {
    pub fn builder() -> HumanNameBuilder {
        HumanNameBuilder::default()
    }

    pub fn use_(&self) -> Option<&Code<NameUse>> {
        self.use_.as_ref()
    }

    pub fn text(&self) -> Option<&FhirString> {
        self.text.as_ref()
    }

    pub fn family(&self) -> Option<&FhirString> {
        self.family.as_ref()
    }

    /// Given names in order; the first is the first name.
    pub fn given(&self) -> &[FhirString] {
        &self.given
    }

    pub fn prefix(&self) -> &[FhirString] {
        &self.prefix
    }

    pub fn suffix(&self) -> &[FhirString] {
        &self.suffix
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    fn has_fields(&self) -> bool {
        self.use_.is_some()
            || self.text.is_some()
            || self.family.is_some()
            || !self.given.is_empty()
            || !self.prefix.is_empty()
            || !self.suffix.is_empty()
            || self.period.is_some()
    }
}

impl Visitable for HumanName {
    fn as_node(&self) -> Node<'_> {
        Node::HumanName(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.use_.as_ref(), "use", visitor);
        visitor::accept_field(self.text.as_ref(), "text", visitor);
        visitor::accept_field(self.family.as_ref(), "family", visitor);
        visitor::accept_list(&self.given, "given", visitor);
        visitor::accept_list(&self.prefix, "prefix", visitor);
        visitor::accept_list(&self.suffix, "suffix", visitor);
        visitor::accept_field(self.period.as_ref(), "period", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct HumanNameBuilder {
    draft: HumanName,
}

impl HumanNameBuilder {
    pub fn use_(mut self, use_: impl Into<Code<NameUse>>) -> Self {
        self.draft.use_ = Some(use_.into());
        self
    }

    pub fn use_code(mut self, code: &str) -> Result<Self> {
        self.draft.use_ = Some(Code::of(code)?);
        Ok(self)
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.draft.text = Some(text.into());
        self
    }

    pub fn family(mut self, family: impl Into<FhirString>) -> Self {
        self.draft.family = Some(family.into());
        self
    }

    /// Append a given name.
    pub fn given(mut self, given: impl Into<FhirString>) -> Self {
        self.draft.given.push(given.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<FhirString>) -> Self {
        self.draft.prefix.push(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<FhirString>) -> Self {
        self.draft.suffix.push(suffix.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.draft.period = Some(period);
        self
    }
}

impl Builder for HumanNameBuilder {
    type Target = HumanName;

    fn build(self) -> Result<HumanName> {
        builder::require_value_or_children("HumanName", false, self.draft.has_children())?;
        Ok(self.draft)
    }
}

impl ToBuilder for HumanName {
    type Builder = HumanNameBuilder;

    fn to_builder(&self) -> HumanNameBuilder {
        HumanNameBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(HumanName, HumanNameBuilder => draft.base);
