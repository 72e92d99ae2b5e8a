//! Composite datatypes
//!
//! Each datatype is an immutable value produced by its builder. Fields are
//! private; read them through the getters and copy-modify through
//! [`ToBuilder`](crate::builder::ToBuilder).

mod annotation;
mod codeable_concept;
mod coding;
mod contact_point;
mod extension;
mod human_name;
mod identifier;
mod narrative;
mod period;
mod quantity;
mod reference;

pub use annotation::{Annotation, AnnotationAuthor, AnnotationBuilder};
pub use codeable_concept::{CodeableConcept, CodeableConceptBuilder};
pub use coding::{Coding, CodingBuilder};
pub use contact_point::{ContactPoint, ContactPointBuilder};
pub use extension::{Extension, ExtensionBuilder, ExtensionValue};
pub use human_name::{HumanName, HumanNameBuilder};
pub use identifier::{Identifier, IdentifierBuilder};
pub use narrative::{Narrative, NarrativeBuilder};
pub use period::{Period, PeriodBuilder};
pub use quantity::{Quantity, QuantityBuilder};
pub use reference::{Reference, ReferenceBuilder};
