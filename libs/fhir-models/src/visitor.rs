//! Visitor traversal over model nodes
//!
//! Traversal is pre-order and depth-first. Each node walks its fields in a
//! fixed declared order: `id`, `extension`, then the type's own fields in
//! declaration order. Absent optional fields are skipped; repeating fields
//! are walked item by item with their index.
//!
//! Per node the callbacks are:
//!
//! 1. [`Visitor::pre_visit`] - `false` skips the node entirely
//! 2. [`Visitor::visit_start`]
//! 3. [`Visitor::visit`] - `false` skips the children only
//! 4. children (scalars through [`Visitor::visit_scalar`])
//! 5. [`Visitor::visit_end`]
//! 6. [`Visitor::post_visit`]
//!
//! Choice fields (`value[x]`) are reported with their `[x]` suffix; the
//! node's [`Node::type_name`] tells which type was chosen.

use crate::coded::VocabularyDescriptor;
use crate::datatypes::{
    Annotation, CodeableConcept, Coding, ContactPoint, Extension, HumanName, Identifier,
    Narrative, Period, Quantity, Reference,
};
use crate::element::Element;
use crate::primitive::Scalar;

/// Type-erased view of a primitive.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveRef<'a> {
    pub type_name: &'static str,
    pub id: Option<&'a str>,
    pub extension: &'a [Extension],
    pub value: Option<Scalar<'a>>,
}

/// Type-erased view of a coded value.
#[derive(Debug, Clone, Copy)]
pub struct CodeRef<'a> {
    pub id: Option<&'a str>,
    pub extension: &'a [Extension],
    pub value: Option<&'a str>,
    pub vocabulary: &'static VocabularyDescriptor,
}

/// Every kind of node a visitor can meet.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Primitive(PrimitiveRef<'a>),
    Code(CodeRef<'a>),
    Extension(&'a Extension),
    Coding(&'a Coding),
    CodeableConcept(&'a CodeableConcept),
    Quantity(&'a Quantity),
    Identifier(&'a Identifier),
    Reference(&'a Reference),
    Period(&'a Period),
    ContactPoint(&'a ContactPoint),
    HumanName(&'a HumanName),
    Annotation(&'a Annotation),
    Narrative(&'a Narrative),
}

impl<'a> Node<'a> {
    /// FHIR type tag, used to disambiguate polymorphic fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Primitive(p) => p.type_name,
            Node::Code(_) => "code",
            Node::Extension(_) => "Extension",
            Node::Coding(_) => "Coding",
            Node::CodeableConcept(_) => "CodeableConcept",
            Node::Quantity(_) => "Quantity",
            Node::Identifier(_) => "Identifier",
            Node::Reference(_) => "Reference",
            Node::Period(_) => "Period",
            Node::ContactPoint(_) => "ContactPoint",
            Node::HumanName(_) => "HumanName",
            Node::Annotation(_) => "Annotation",
            Node::Narrative(_) => "Narrative",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Node::Primitive(_) | Node::Code(_))
    }

    pub fn id(&self) -> Option<&'a str> {
        match self {
            Node::Primitive(p) => p.id,
            Node::Code(c) => c.id,
            Node::Extension(e) => e.id(),
            Node::Coding(c) => c.id(),
            Node::CodeableConcept(c) => c.id(),
            Node::Quantity(q) => q.id(),
            Node::Identifier(i) => i.id(),
            Node::Reference(r) => r.id(),
            Node::Period(p) => p.id(),
            Node::ContactPoint(c) => c.id(),
            Node::HumanName(h) => h.id(),
            Node::Annotation(a) => a.id(),
            Node::Narrative(n) => n.id(),
        }
    }

    pub fn extension(&self) -> &'a [Extension] {
        match self {
            Node::Primitive(p) => p.extension,
            Node::Code(c) => c.extension,
            Node::Extension(e) => e.extension(),
            Node::Coding(c) => c.extension(),
            Node::CodeableConcept(c) => c.extension(),
            Node::Quantity(q) => q.extension(),
            Node::Identifier(i) => i.extension(),
            Node::Reference(r) => r.extension(),
            Node::Period(p) => p.extension(),
            Node::ContactPoint(c) => c.extension(),
            Node::HumanName(h) => h.extension(),
            Node::Annotation(a) => a.extension(),
            Node::Narrative(n) => n.extension(),
        }
    }
}

/// Callbacks invoked during traversal. Every method has a no-op default.
pub trait Visitor {
    fn pre_visit(&mut self, _node: Node<'_>) -> bool {
        true
    }

    fn visit_start(&mut self, _name: &str, _index: Option<usize>, _node: Node<'_>) {}

    fn visit(&mut self, _name: &str, _index: Option<usize>, _node: Node<'_>) -> bool {
        true
    }

    /// Scalar leaves: primitive values, element ids and attribute-like
    /// strings such as `Extension.url`.
    fn visit_scalar(&mut self, _name: &str, _value: Scalar<'_>) {}

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: Node<'_>) {}

    fn post_visit(&mut self, _node: Node<'_>) {}
}

/// Implemented by every model node.
pub trait Visitable {
    fn as_node(&self) -> Node<'_>;

    /// Walk the fields in declared order.
    fn accept_children(&self, visitor: &mut dyn Visitor);

    /// Walk this node as field `name` (item `index` of a repeating field).
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        let node = self.as_node();
        if !visitor.pre_visit(node) {
            return;
        }
        visitor.visit_start(name, index, node);
        if visitor.visit(name, index, node) {
            self.accept_children(visitor);
        }
        visitor.visit_end(name, index, node);
        visitor.post_visit(node);
    }

    /// Walk this node as a root, named after its type.
    fn accept_root(&self, visitor: &mut dyn Visitor) {
        let name = self.as_node().type_name();
        self.accept(name, None, visitor);
    }
}

pub fn visit_id(id: Option<&str>, visitor: &mut dyn Visitor) {
    if let Some(id) = id {
        visitor.visit_scalar("id", Scalar::String(id));
    }
}

pub fn accept_field<T: Visitable>(field: Option<&T>, name: &str, visitor: &mut dyn Visitor) {
    if let Some(field) = field {
        field.accept(name, None, visitor);
    }
}

pub fn accept_list<T: Visitable>(items: &[T], name: &str, visitor: &mut dyn Visitor) {
    for (index, item) in items.iter().enumerate() {
        item.accept(name, Some(index), visitor);
    }
}

/// Collects the FHIRPath-like location of every node and scalar, in
/// traversal order, e.g. `HumanName.given[1]` or `Quantity.value.value`.
///
/// Two values with equal path lists and equal scalars are structurally
/// identical, which makes the output handy for diffing.
#[derive(Debug, Default)]
pub struct PathCollector {
    stack: Vec<String>,
    paths: Vec<(String, Option<String>)>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(path, scalar)` pairs; `scalar` is `None` for element nodes.
    pub fn into_entries(self) -> Vec<(String, Option<String>)> {
        self.paths
    }

    fn current(&self) -> String {
        self.stack.join(".")
    }
}

impl Visitor for PathCollector {
    fn visit_start(&mut self, name: &str, index: Option<usize>, _node: Node<'_>) {
        let segment = match index {
            Some(i) => format!("{}[{}]", name, i),
            None => name.to_string(),
        };
        self.stack.push(segment);
        self.paths.push((self.current(), None));
    }

    fn visit_scalar(&mut self, name: &str, value: Scalar<'_>) {
        let path = format!("{}.{}", self.current(), name);
        self.paths.push((path, Some(value.to_string())));
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: Node<'_>) {
        self.stack.pop();
    }
}

/// Paths of all nodes and scalars below (and including) `node`.
pub fn paths<T: Visitable>(node: &T) -> Vec<(String, Option<String>)> {
    let mut collector = PathCollector::new();
    node.accept_root(&mut collector);
    collector.into_entries()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::primitive::FhirString;

    #[derive(Default)]
    struct Events(Vec<String>);

    impl Visitor for Events {
        fn pre_visit(&mut self, node: Node<'_>) -> bool {
            self.0.push(format!("pre {}", node.type_name()));
            node.type_name() != "Period"
        }

        fn visit_start(&mut self, name: &str, index: Option<usize>, _node: Node<'_>) {
            self.0.push(format!("start {} {:?}", name, index));
        }

        fn visit(&mut self, name: &str, _index: Option<usize>, _node: Node<'_>) -> bool {
            name != "type"
        }

        fn visit_scalar(&mut self, name: &str, value: Scalar<'_>) {
            self.0.push(format!("scalar {}={}", name, value));
        }

        fn visit_end(&mut self, name: &str, _index: Option<usize>, _node: Node<'_>) {
            self.0.push(format!("end {}", name));
        }

        fn post_visit(&mut self, node: Node<'_>) {
            self.0.push(format!("post {}", node.type_name()));
        }
    }

    fn identifier() -> Identifier {
        Identifier::builder()
            .id("i1")
            .system("urn:oid:1.2.36.146.595.217.0.1")
            .value("12345")
            .type_(
                CodeableConcept::builder()
                    .text("Medical record number")
                    .build()
                    .unwrap(),
            )
            .period(Period::builder().start("2001-05-06").build().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn callbacks_follow_the_protocol() {
        let mut events = Events::default();
        identifier().accept_root(&mut events);

        assert_eq!(
            events.0,
            vec![
                "pre Identifier",
                "start Identifier None",
                "scalar id=i1",
                // visit() returned false: no children, but start/end still emitted
                "pre CodeableConcept",
                "start type None",
                "end type",
                "post CodeableConcept",
                "pre string",
                "start system None",
                "scalar value=urn:oid:1.2.36.146.595.217.0.1",
                "end system",
                "post string",
                "pre string",
                "start value None",
                "scalar value=12345",
                "end value",
                "post string",
                // pre_visit returned false: nothing else for the period
                "pre Period",
                "end Identifier",
                "post Identifier",
            ]
        );
    }

    #[test]
    fn repeating_fields_carry_indexes() {
        let name = HumanName::builder()
            .family("Chalmers")
            .given("Peter")
            .given("James")
            .build()
            .unwrap();
        let entries = paths(&name);
        let locations: Vec<&str> = entries.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            locations,
            vec![
                "HumanName",
                "HumanName.family",
                "HumanName.family.value",
                "HumanName.given[0]",
                "HumanName.given[0].value",
                "HumanName.given[1]",
                "HumanName.given[1].value",
            ]
        );
    }

    #[test]
    fn node_accessors() {
        let s = FhirString::builder().id("s").value("x").build().unwrap();
        let node = s.as_node();
        assert!(node.is_primitive());
        assert_eq!(node.id(), Some("s"));
        assert_eq!(node.type_name(), "string");
        assert!(node.extension().is_empty());
    }
}
