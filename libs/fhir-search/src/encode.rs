//! Wire encoding of search values
//!
//! ```text
//! value      := [prefix] body
//! body       := quantity | token | plain | composite
//! quantity   := number "|" system "|" code
//! token      := system "|" code
//! composite  := "composite[" value ("$" value)* "]"
//! ```
//!
//! Scalar fields are written in the order number, system, code, string,
//! date, with `|` between populated fields. The implicit `eq` prefix is
//! never written.

use crate::value::SearchParameterValue;
use serde::Deserialize;
use std::fmt;
use tracing::trace;

const FIELD_SEPARATOR: char = '|';
const COMPONENT_SEPARATOR: char = '$';

/// Encoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Escape `\`, `,`, `|` and `$` inside field values with a backslash.
    pub escape_reserved: bool,
}

impl EncodeOptions {
    pub fn escaped() -> Self {
        Self {
            escape_reserved: true,
        }
    }
}

fn push_field(out: &mut String, field: &str, options: &EncodeOptions) {
    if !options.escape_reserved {
        out.push_str(field);
        return;
    }
    for c in field.chars() {
        if matches!(c, '\\' | ',' | '|' | '$') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl SearchParameterValue {
    /// Encode with default options.
    pub fn encode(&self) -> String {
        self.encode_with(&EncodeOptions::default())
    }

    pub fn encode_with(&self, options: &EncodeOptions) -> String {
        let mut out = String::new();
        self.write_to(&mut out, options);
        trace!(kind = %self.kind(), encoded = %out, "encoded search value");
        out
    }

    fn write_to(&self, out: &mut String, options: &EncodeOptions) {
        if let Some(prefix) = self.prefix.filter(|p| !p.is_implicit()) {
            out.push_str(prefix.as_str());
        }

        if !self.components.is_empty() {
            out.push_str("composite[");
            for (i, component) in self.components.iter().enumerate() {
                if i > 0 {
                    out.push(COMPONENT_SEPARATOR);
                }
                component.write_to(out, options);
            }
            out.push(']');
            return;
        }

        let number = self.number.map(|n| n.to_string());
        let fields = [
            number.as_deref(),
            self.system.as_deref(),
            self.code.as_deref(),
            self.string.as_deref(),
            self.date.as_deref(),
        ];
        let mut first = true;
        for field in fields.into_iter().flatten() {
            if !first {
                out.push(FIELD_SEPARATOR);
            }
            first = false;
            push_field(out, field, options);
        }
    }
}

impl fmt::Display for SearchParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out, &EncodeOptions::default());
        f.write_str(&out)
    }
}
