use crate::builder::{self, Builder, ToBuilder};
use crate::coded::Code;
use crate::codes::{ContactPointSystem, ContactPointUse};
use crate::datatypes::Period;
use crate::element::{Element, ElementBase};
use crate::error::Result;
use crate::primitive::{FhirInteger, FhirString};
use crate::visitor::{self, Node, Visitable, Visitor};

/// Details for a technology-mediated contact: phone, email, ...
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactPoint {
    base: ElementBase,
    system: Option<Code<ContactPointSystem>>,
    value: Option<FhirString>,
    use_: Option<Code<ContactPointUse>>,
    rank: Option<FhirInteger>,
    period: Option<Period>,
}

impl ContactPoint {
    pub fn builder() -> ContactPointBuilder {
        ContactPointBuilder::default()
    }

    pub fn system(&self) -> Option<&Code<ContactPointSystem>> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&FhirString> {
        self.value.as_ref()
    }

    pub fn use_(&self) -> Option<&Code<ContactPointUse>> {
        self.use_.as_ref()
    }

    /// Preference order; 1 is the highest.
    pub fn rank(&self) -> Option<&FhirInteger> {
        self.rank.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    fn has_fields(&self) -> bool {
        self.system.is_some()
            || self.value.is_some()
            || self.use_.is_some()
            || self.rank.is_some()
            || self.period.is_some()
    }
}

impl Visitable for ContactPoint {
    fn as_node(&self) -> Node<'_> {
        Node::ContactPoint(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.system.as_ref(), "system", visitor);
        visitor::accept_field(self.value.as_ref(), "value", visitor);
        visitor::accept_field(self.use_.as_ref(), "use", visitor);
        visitor::accept_field(self.rank.as_ref(), "rank", visitor);
        visitor::accept_field(self.period.as_ref(), "period", visitor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPointBuilder {
    draft: ContactPoint,
}

impl ContactPointBuilder {
    pub fn system(mut self, system: impl Into<Code<ContactPointSystem>>) -> Self {
        self.draft.system = Some(system.into());
        self
    }

    pub fn system_code(mut self, code: &str) -> Result<Self> {
        self.draft.system = Some(Code::of(code)?);
        Ok(self)
    }

    pub fn value(mut self, value: impl Into<FhirString>) -> Self {
        self.draft.value = Some(value.into());
        self
    }

    pub fn use_(mut self, use_: impl Into<Code<ContactPointUse>>) -> Self {
        self.draft.use_ = Some(use_.into());
        self
    }

    pub fn use_code(mut self, code: &str) -> Result<Self> {
        self.draft.use_ = Some(Code::of(code)?);
        Ok(self)
    }

    pub fn rank(mut self, rank: impl Into<FhirInteger>) -> Self {
        self.draft.rank = Some(rank.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.draft.period = Some(period);
        self
    }
}

impl Builder for ContactPointBuilder {
    type Target = ContactPoint;

    fn build(self) -> Result<ContactPoint> {
        let cp = &self.draft;
        builder::require_value_or_children("ContactPoint", false, cp.has_children())?;
        // cpt-2
        builder::require_if(cp.value.is_some(), cp.system.is_some(), "ContactPoint.system")?;
        Ok(self.draft)
    }
}

impl ToBuilder for ContactPoint {
    type Builder = ContactPointBuilder;

    fn to_builder(&self) -> ContactPointBuilder {
        ContactPointBuilder {
            draft: self.clone(),
        }
    }
}

crate::element::composite_element!(ContactPoint, ContactPointBuilder => draft.base);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn value_needs_a_system() {
        let err = ContactPoint::builder()
            .value("+31 20 555 0100")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                field: "ContactPoint.system"
            }
        );

        let phone = ContactPoint::builder()
            .system(ContactPointSystem::Phone)
            .value("+31 20 555 0100")
            .use_code("work")
            .unwrap()
            .rank(1)
            .build()
            .unwrap();
        assert_eq!(phone.use_().and_then(|u| u.member()), Some(ContactPointUse::Work));
    }

    #[test]
    fn unknown_system_code() {
        let err = ContactPoint::builder().system_code("telex").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownCode {
                code: "telex".to_string(),
                vocabulary: "ContactPointSystem",
            }
        );
    }
}
