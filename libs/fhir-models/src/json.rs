//! FHIR JSON rendering
//!
//! [`JsonWriter`] is a plain [`Visitor`]: it rebuilds the tree from the
//! traversal events, so any node can be rendered without per-type code.
//!
//! Primitive `id` and extensions go to the `_name` sibling of the value;
//! in repeating primitives the `_name` array is padded with `null` so it
//! lines up with the values. Choice fields (`value[x]`) are renamed after
//! the chosen type: `valueString`, `valueCoding`, ...

use crate::primitive::Scalar;
use crate::visitor::{Node, Visitable, Visitor};
use serde_json::{Map, Number, Value};

#[derive(Debug)]
struct Frame {
    primitive: bool,
    value: Option<Value>,
    fields: Map<String, Value>,
}

/// Visitor that renders the visited node as a `serde_json::Value`.
#[derive(Debug, Default)]
pub struct JsonWriter {
    stack: Vec<Frame>,
    output: Option<Value>,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered root, `Value::Null` when nothing was visited.
    ///
    /// A primitive root renders as its bare value unless it carries an `id`
    /// or extensions, in which case it is an object with a `value` member.
    pub fn into_value(self) -> Value {
        self.output.unwrap_or(Value::Null)
    }
}

fn scalar_to_json(scalar: Scalar<'_>) -> Value {
    match scalar {
        Scalar::String(s) => Value::String(s.to_string()),
        Scalar::Boolean(b) => Value::Bool(b),
        Scalar::Integer(i) => Value::Number(Number::from(i)),
        // arbitrary_precision keeps the text as written, scale included.
        Scalar::Decimal(d) => {
            let text = d.to_string();
            serde_json::from_str::<Number>(&text)
                .map(Value::Number)
                .unwrap_or(Value::String(text))
        }
    }
}

/// `value[x]` + `string` -> `valueString`.
fn property_name(name: &str, node: Node<'_>) -> String {
    match name.strip_suffix("[x]") {
        Some(stem) => {
            let type_name = node.type_name();
            let mut chars = type_name.chars();
            match chars.next() {
                Some(first) => format!("{}{}{}", stem, first.to_ascii_uppercase(), chars.as_str()),
                None => stem.to_string(),
            }
        }
        None => name.to_string(),
    }
}

fn push_item(fields: &mut Map<String, Value>, key: &str, index: usize, item: Value) {
    let entry = fields
        .entry(key.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(items) = entry {
        while items.len() < index {
            items.push(Value::Null);
        }
        items.push(item);
    }
}

impl Visitor for JsonWriter {
    fn visit_start(&mut self, _name: &str, _index: Option<usize>, node: Node<'_>) {
        self.stack.push(Frame {
            primitive: node.is_primitive(),
            value: None,
            fields: Map::new(),
        });
    }

    fn visit_scalar(&mut self, name: &str, value: Scalar<'_>) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        if frame.primitive && name == "value" {
            frame.value = Some(scalar_to_json(value));
        } else {
            frame.fields.insert(name.to_string(), scalar_to_json(value));
        }
    }

    fn visit_end(&mut self, name: &str, index: Option<usize>, node: Node<'_>) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        let Some(parent) = self.stack.last_mut() else {
            self.output = Some(match (frame.primitive, frame.value) {
                (true, Some(value)) if frame.fields.is_empty() => value,
                (true, value) => {
                    let mut fields = frame.fields;
                    if let Some(value) = value {
                        fields.insert("value".to_string(), value);
                    }
                    Value::Object(fields)
                }
                (false, _) => Value::Object(frame.fields),
            });
            return;
        };

        let key = property_name(name, node);
        if !frame.primitive {
            let object = Value::Object(frame.fields);
            match index {
                Some(i) => push_item(&mut parent.fields, &key, i, object),
                None => {
                    parent.fields.insert(key, object);
                }
            }
            return;
        }

        let meta_key = format!("_{}", key);
        let meta = (!frame.fields.is_empty()).then(|| Value::Object(frame.fields));
        match index {
            Some(i) => {
                push_item(
                    &mut parent.fields,
                    &key,
                    i,
                    frame.value.unwrap_or(Value::Null),
                );
                match meta {
                    Some(meta) => push_item(&mut parent.fields, &meta_key, i, meta),
                    None => {
                        if let Some(Value::Array(items)) = parent.fields.get_mut(&meta_key) {
                            items.push(Value::Null);
                        }
                    }
                }
            }
            None => {
                if let Some(value) = frame.value {
                    parent.fields.insert(key, value);
                }
                if let Some(meta) = meta {
                    parent.fields.insert(meta_key, meta);
                }
            }
        }
    }
}

/// Render any node to FHIR JSON.
pub fn to_json_value<T: Visitable + ?Sized>(node: &T) -> Value {
    let mut writer = JsonWriter::new();
    node.accept_root(&mut writer);
    writer.into_value()
}
