use crate::builder::{self, Builder, ToBuilder};
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::DateTime;
use crate::visitor::{self, Node, Visitable, Visitor};

/// A time range bounded by start and/or end.
///
/// An absent end means the period is ongoing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Period {
    base: ElementBase,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl Period {
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn start(&self) -> Option<&DateTime> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&DateTime> {
        self.end.as_ref()
    }

    fn has_fields(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

impl Visitable for Period {
    fn as_node(&self) -> Node<'_> {
        Node::Period(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.start.as_ref(), "start", visitor);
        visitor::accept_field(self.end.as_ref(), "end", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    draft: Period,
}

impl PeriodBuilder {
    pub fn start(mut self, start: impl Into<DateTime>) -> Self {
        self.draft.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<DateTime>) -> Self {
        self.draft.end = Some(end.into());
        self
    }
}

impl Builder for PeriodBuilder {
    type Target = Period;

    fn build(self) -> Result<Period> {
        builder::require_value_or_children("Period", false, self.draft.has_children())?;
        Ok(self.draft)
    }
}

impl ToBuilder for Period {
    type Builder = PeriodBuilder;

    fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(Period, PeriodBuilder => draft.base);
