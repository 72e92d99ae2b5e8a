use crate::builder::{self, Builder, ToBuilder};
use crate::datatypes::{CodeableConcept, Coding, Identifier, Period, Quantity, Reference};
use crate::element::ElementBase;
use crate::error::Result;
use crate::primitive::{FhirBoolean, FhirDecimal, FhirInteger, FhirString, Scalar};
use crate::visitor::{Node, Visitable, Visitor};

/// The choice of types an extension value (`value[x]`) can take.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionValue {
    String(FhirString),
    Boolean(FhirBoolean),
    Integer(FhirInteger),
    Decimal(FhirDecimal),
    Coding(Coding),
    CodeableConcept(CodeableConcept),
    Quantity(Quantity),
    Identifier(Identifier),
    Reference(Reference),
    Period(Period),
}

impl ExtensionValue {
    fn as_visitable(&self) -> &dyn Visitable {
        match self {
            ExtensionValue::String(v) => v,
            ExtensionValue::Boolean(v) => v,
            ExtensionValue::Integer(v) => v,
            ExtensionValue::Decimal(v) => v,
            ExtensionValue::Coding(v) => v,
            ExtensionValue::CodeableConcept(v) => v,
            ExtensionValue::Quantity(v) => v,
            ExtensionValue::Identifier(v) => v,
            ExtensionValue::Reference(v) => v,
            ExtensionValue::Period(v) => v,
        }
    }

    /// FHIR type of the chosen value, e.g. `string` or `Coding`.
    pub fn type_name(&self) -> &'static str {
        self.as_visitable().as_node().type_name()
    }
}

impl Visitable for ExtensionValue {
    fn as_node(&self) -> Node<'_> {
        self.as_visitable().as_node()
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.as_visitable().accept_children(visitor);
    }
}

macro_rules! extension_value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for ExtensionValue {
                fn from(value: $ty) -> Self {
                    ExtensionValue::$variant(value)
                }
            }
        )+
    };
}

extension_value_from! {
    FhirString => String,
    FhirBoolean => Boolean,
    FhirInteger => Integer,
    FhirDecimal => Decimal,
    Coding => Coding,
    CodeableConcept => CodeableConcept,
    Quantity => Quantity,
    Identifier => Identifier,
    Reference => Reference,
    Period => Period,
}

/// Additional content defined by an implementation or profile.
///
/// An extension carries either a value or nested extensions, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    base: ElementBase,
    url: String,
    value: Option<ExtensionValue>,
}

impl Extension {
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::default()
    }

    /// Canonical URL identifying the extension's definition.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn value(&self) -> Option<&ExtensionValue> {
        self.value.as_ref()
    }

    /// Nested extensions of a complex extension.
    pub fn children(&self) -> &[Extension] {
        self.base.extension()
    }

    fn has_fields(&self) -> bool {
        self.value.is_some()
    }
}

impl Visitable for Extension {
    fn as_node(&self) -> Node<'_> {
        Node::Extension(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor.visit_scalar("url", Scalar::String(&self.url));
        if let Some(value) = &self.value {
            value.accept("value[x]", None, visitor);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    base: ElementBase,
    url: Option<String>,
    value: Option<ExtensionValue>,
}

impl ExtensionBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn value(mut self, value: impl Into<ExtensionValue>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Builder for ExtensionBuilder {
    type Target = Extension;

    fn build(self) -> Result<Extension> {
        let url = builder::require(self.url, "Extension.url")?;
        builder::exclusive(
            ("Extension.value[x]", self.value.is_some()),
            ("Extension.extension", self.base.has_extension()),
        )?;
        builder::require_value_or_children(
            "Extension",
            self.value.is_some(),
            self.base.has_extension(),
        )?;
        Ok(Extension {
            base: self.base,
            url,
            value: self.value,
        })
    }
}

impl ToBuilder for Extension {
    type Builder = ExtensionBuilder;

    fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            base: self.base.clone(),
            url: Some(self.url.clone()),
            value: self.value.clone(),
        }
    }
}

crate::element::composite_element!(Extension, ExtensionBuilder => base);
