use crate::builder::{self, Builder, ToBuilder};
use crate::coded::Code;
use crate::codes::NarrativeStatus;
use crate::element::ElementBase;
use crate::error::Result;
use crate::primitive::Scalar;
use crate::visitor::{Node, Visitable, Visitor};

/// Human readable XHTML summary of a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    base: ElementBase,
    status: Code<NarrativeStatus>,
    div: String,
}

impl Narrative {
    pub fn builder() -> NarrativeBuilder {
        NarrativeBuilder::default()
    }

    pub fn status(&self) -> &Code<NarrativeStatus> {
        &self.status
    }

    /// The XHTML `<div>` fragment, unparsed.
    pub fn div(&self) -> &str {
        &self.div
    }

    fn has_fields(&self) -> bool {
        true
    }
}

impl Visitable for Narrative {
    fn as_node(&self) -> Node<'_> {
        Node::Narrative(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        self.status.accept("status", None, visitor);
        visitor.visit_scalar("div", Scalar::String(&self.div));
    }
}

#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    base: ElementBase,
    status: Option<Code<NarrativeStatus>>,
    div: Option<String>,
}

impl NarrativeBuilder {
    pub fn status(mut self, status: impl Into<Code<NarrativeStatus>>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn status_code(mut self, code: &str) -> Result<Self> {
        self.status = Some(Code::of(code)?);
        Ok(self)
    }

    pub fn div(mut self, div: impl Into<String>) -> Self {
        self.div = Some(div.into());
        self
    }
}

impl Builder for NarrativeBuilder {
    type Target = Narrative;

    fn build(self) -> Result<Narrative> {
        let status = builder::require(self.status, "Narrative.status")?;
        let div = builder::require(self.div, "Narrative.div")?;
        Ok(Narrative {
            base: self.base,
            status,
            div,
        })
    }
}

impl ToBuilder for Narrative {
    type Builder = NarrativeBuilder;

    fn to_builder(&self) -> NarrativeBuilder {
        NarrativeBuilder {
            base: self.base.clone(),
            status: Some(self.status.clone()),
            div: Some(self.div.clone()),
        }
    }
}

crate::element::composite_element!(Narrative, NarrativeBuilder => base);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn status_and_div_are_required() {
        let err = Narrative::builder()
            .div("<div xmlns=\"http://www.w3.org/1999/xhtml\">x</div>")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                field: "Narrative.status"
            }
        );
        assert!(Narrative::builder()
            .status(NarrativeStatus::Generated)
            .build()
            .is_err());
    }

    #[test]
    fn status_from_wire_code() {
        let narrative = Narrative::builder()
            .status_code("additional")
            .unwrap()
            .div("<div xmlns=\"http://www.w3.org/1999/xhtml\">x</div>")
            .build()
            .unwrap();
        assert_eq!(*narrative.status(), NarrativeStatus::Additional);
    }
}
