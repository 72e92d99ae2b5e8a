//! Accessors shared by every model node

use crate::datatypes::Extension;
use crate::visitor::{self, Visitable, Visitor};

/// Common surface of primitives, coded values and composite elements.
pub trait Element: Visitable {
    /// Internal element id, unique within the enclosing resource.
    fn id(&self) -> Option<&str>;

    /// Extensions in insertion order.
    fn extension(&self) -> &[Extension];

    /// True when the element carries extensions, a value, or any populated field.
    ///
    /// The `id` alone does not count.
    fn has_children(&self) -> bool;

    /// First extension with the given canonical URL.
    fn find_extension(&self, url: &str) -> Option<&Extension> {
        self.extension().iter().find(|e| e.url() == url)
    }

    /// All extensions with the given canonical URL, in order.
    fn extensions_by_url<'a>(&'a self, url: &'a str) -> Vec<&'a Extension> {
        self.extension().iter().filter(|e| e.url() == url).collect()
    }
}

/// The `id` and `extension` fields every element starts with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementBase {
    pub(crate) id: Option<String>,
    pub(crate) extension: Vec<Extension>,
}

impl ElementBase {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    /// Walk `id` then `extension`, the leading fields of every element.
    pub fn accept_children(&self, visitor: &mut dyn Visitor) {
        visitor::visit_id(self.id.as_deref(), visitor);
        visitor::accept_list(&self.extension, "extension", visitor);
    }
}

/// Implement [`Element`] for a composite and [`ElementBuilder`] for its
/// builder.
///
/// The composite keeps its shared fields in `base` and provides a private
/// `has_fields()`; the trailing path names the builder's `ElementBase`.
///
/// [`ElementBuilder`]: crate::builder::ElementBuilder
macro_rules! composite_element {
    ($ty:ident, $builder:ident => $($field:ident).+) => {
        impl $crate::element::Element for $ty {
            fn id(&self) -> Option<&str> {
                self.base.id()
            }

            fn extension(&self) -> &[$crate::datatypes::Extension] {
                self.base.extension()
            }

            fn has_children(&self) -> bool {
                self.base.has_extension() || self.has_fields()
            }
        }

        impl $crate::builder::ElementBuilder for $builder {
            fn base_mut(&mut self) -> &mut $crate::element::ElementBase {
                &mut self.$($field).+
            }
        }
    };
}

pub(crate) use composite_element;
