use crate::builder::{self, Builder, ToBuilder};
use crate::datatypes::Reference;
use crate::element::ElementBase;
use crate::error::Result;
use crate::primitive::{DateTime, FhirString, Markdown};
use crate::visitor::{self, Node, Visitable, Visitor};

/// Who wrote an annotation: `author[x]`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationAuthor {
    Reference(Reference),
    String(FhirString),
}

impl Visitable for AnnotationAuthor {
    fn as_node(&self) -> Node<'_> {
        match self {
            AnnotationAuthor::Reference(r) => r.as_node(),
            AnnotationAuthor::String(s) => s.as_node(),
        }
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        match self {
            AnnotationAuthor::Reference(r) => r.accept_children(visitor),
            AnnotationAuthor::String(s) => s.accept_children(visitor),
        }
    }
}

/// A text note with optional authorship and time.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    base: ElementBase,
    author: Option<AnnotationAuthor>,
    time: Option<DateTime>,
    text: Markdown,
}

impl Annotation {
    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    pub fn author(&self) -> Option<&AnnotationAuthor> {
        self.author.as_ref()
    }

    pub fn time(&self) -> Option<&DateTime> {
        self.time.as_ref()
    }

    pub fn text(&self) -> &Markdown {
        &self.text
    }

    fn has_fields(&self) -> bool {
        true
    }
}

impl Visitable for Annotation {
    fn as_node(&self) -> Node<'_> {
        Node::Annotation(self)
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        visitor::accept_field(self.author.as_ref(), "author[x]", visitor);
        visitor::accept_field(self.time.as_ref(), "time", visitor);
        self.text.accept("text", None, visitor);
    }
}

/// Builder for [`Annotation`].
///
/// The two `author[x]` setters are exclusive; setting both fails at build.
#[derive(Debug, Clone, Default)]
pub struct AnnotationBuilder {
    base: ElementBase,
    author_reference: Option<Reference>,
    author_string: Option<FhirString>,
    time: Option<DateTime>,
    text: Option<Markdown>,
}

impl AnnotationBuilder {
    pub fn author_reference(mut self, author: Reference) -> Self {
        self.author_reference = Some(author);
        self
    }

    pub fn author_string(mut self, author: impl Into<FhirString>) -> Self {
        self.author_string = Some(author.into());
        self
    }

    pub fn time(mut self, time: impl Into<DateTime>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn text(mut self, text: impl Into<Markdown>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl Builder for AnnotationBuilder {
    type Target = Annotation;

    fn build(self) -> Result<Annotation> {
        builder::exclusive(
            ("Annotation.authorReference", self.author_reference.is_some()),
            ("Annotation.authorString", self.author_string.is_some()),
        )?;
        let text = builder::require(self.text, "Annotation.text")?;
        let author = match (self.author_reference, self.author_string) {
            (Some(reference), _) => Some(AnnotationAuthor::Reference(reference)),
            (None, Some(name)) => Some(AnnotationAuthor::String(name)),
            (None, None) => None,
        };
        Ok(Annotation {
            base: self.base,
            author,
            time: self.time,
            text,
        })
    }
}

impl ToBuilder for Annotation {
    type Builder = AnnotationBuilder;

    fn to_builder(&self) -> AnnotationBuilder {
        let (author_reference, author_string) = match &self.author {
            Some(AnnotationAuthor::Reference(r)) => (Some(r.clone()), None),
            Some(AnnotationAuthor::String(s)) => (None, Some(s.clone())),
            None => (None, None),
        };
        AnnotationBuilder {
            base: self.base.clone(),
            author_reference,
            author_string,
            time: self.time.clone(),
            text: Some(self.text.clone()),
        }
    }
}

crate::element::composite_element!(Annotation, AnnotationBuilder => base);
