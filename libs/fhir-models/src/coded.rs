//! Coded values bound to a vocabulary
//!
//! A single generic [`Code<V>`] replaces one type per value set. The
//! vocabulary `V` is a plain Rust enum whose variants are the well-known
//! members; it supplies a static [`VocabularyDescriptor`] and a compile-time
//! perfect hash for wire-code lookups.
//!
//! - **Closed** vocabularies only accept member codes.
//! - **Open** vocabularies accept any lexically valid code; the enum
//!   members are convenience constants.

use crate::builder::{self, Builder, ElementBuilder, ToBuilder};
use crate::datatypes::Extension;
use crate::element::{Element, ElementBase};
use crate::error::{Error, Result};
use crate::primitive::Scalar;
use crate::visitor::{CodeRef, Node, Visitable, Visitor};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// FHIR `code` lexical space: no leading/trailing or repeated whitespace.
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s]+( [^\s]+)*$").expect("code pattern compiles"));

/// Whether values outside the member list are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Openness {
    Open,
    Closed,
}

/// One (symbolic name, wire code) pair of a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: &'static str,
    pub code: &'static str,
    pub display: &'static str,
}

/// Static description of a vocabulary.
#[derive(Debug, PartialEq, Eq)]
pub struct VocabularyDescriptor {
    pub name: &'static str,
    /// Canonical URL of the code system the members come from.
    pub system: &'static str,
    pub openness: Openness,
    pub members: &'static [Member],
}

impl VocabularyDescriptor {
    pub fn is_closed(&self) -> bool {
        self.openness == Openness::Closed
    }

    /// Exact, case-sensitive member lookup by wire code.
    pub fn find(&self, code: &str) -> Option<&'static Member> {
        self.members.iter().find(|m| m.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }
}

/// A vocabulary whose members are the variants of a Rust enum.
///
/// Implemented through the `vocabulary!` macro.
pub trait Vocabulary: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    const DESCRIPTOR: &'static VocabularyDescriptor;

    /// Wire code of this member.
    fn code(self) -> &'static str;

    /// Human readable display of this member.
    fn display(self) -> &'static str;

    /// Exact, case-sensitive lookup. Never coerces.
    fn from_code(code: &str) -> Option<Self>;

    /// All members in declaration order.
    fn members() -> &'static [Self];
}

/// Check `code` against `V` and return the owned wire value.
fn resolve<V: Vocabulary>(code: &str) -> Result<String> {
    let descriptor = V::DESCRIPTOR;
    if descriptor.is_closed() {
        if V::from_code(code).is_none() {
            return builder::reject(Error::UnknownCode {
                code: code.to_string(),
                vocabulary: descriptor.name,
            });
        }
    } else if !CODE_PATTERN.is_match(code) {
        return builder::reject(Error::InvalidCode {
            code: code.to_string(),
        });
    }
    Ok(code.to_string())
}

/// A `code` primitive bound to vocabulary `V`.
#[derive(Debug, Clone, PartialEq)]
pub struct Code<V: Vocabulary> {
    base: ElementBase,
    value: Option<String>,
    vocabulary: PhantomData<V>,
}

impl<V: Vocabulary> Code<V> {
    /// Resolve a wire code. Fails with `UnknownCode` for closed vocabularies
    /// when no member matches.
    pub fn of(code: &str) -> Result<Self> {
        let value = resolve::<V>(code)?;
        Ok(Self {
            base: ElementBase::default(),
            value: Some(value),
            vocabulary: PhantomData,
        })
    }

    pub fn builder() -> CodeBuilder<V> {
        CodeBuilder::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The vocabulary member this value names, if any.
    ///
    /// Always `Some` for a closed vocabulary with a value.
    pub fn member(&self) -> Option<V> {
        self.value.as_deref().and_then(V::from_code)
    }

    pub fn vocabulary(&self) -> &'static VocabularyDescriptor {
        V::DESCRIPTOR
    }
}

impl<V: Vocabulary> From<V> for Code<V> {
    fn from(member: V) -> Self {
        Self {
            base: ElementBase::default(),
            value: Some(member.code().to_string()),
            vocabulary: PhantomData,
        }
    }
}

impl<V: Vocabulary> PartialEq<V> for Code<V> {
    fn eq(&self, other: &V) -> bool {
        self.value.as_deref() == Some(other.code())
    }
}

impl<V: Vocabulary> fmt::Display for Code<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_deref().unwrap_or_default())
    }
}

impl<V: Vocabulary> Element for Code<V> {
    fn id(&self) -> Option<&str> {
        self.base.id()
    }

    fn extension(&self) -> &[Extension] {
        self.base.extension()
    }

    fn has_children(&self) -> bool {
        self.base.has_extension() || self.value.is_some()
    }
}

impl<V: Vocabulary> Visitable for Code<V> {
    fn as_node(&self) -> Node<'_> {
        Node::Code(CodeRef {
            id: self.base.id(),
            extension: self.base.extension(),
            value: self.value.as_deref(),
            vocabulary: V::DESCRIPTOR,
        })
    }

    fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.base.accept_children(visitor);
        if let Some(value) = &self.value {
            visitor.visit_scalar("value", Scalar::String(value));
        }
    }
}

/// Builder for [`Code`].
#[derive(Debug, Clone)]
pub struct CodeBuilder<V: Vocabulary> {
    base: ElementBase,
    value: Option<String>,
    vocabulary: PhantomData<V>,
}

impl<V: Vocabulary> Default for CodeBuilder<V> {
    fn default() -> Self {
        Self {
            base: ElementBase::default(),
            value: None,
            vocabulary: PhantomData,
        }
    }
}

impl<V: Vocabulary> CodeBuilder<V> {
    /// Set the value from a vocabulary member. Never fails.
    pub fn value(mut self, member: V) -> Self {
        self.value = Some(member.code().to_string());
        self
    }

    /// Set the value from a wire code, resolved against the vocabulary.
    pub fn code(mut self, code: &str) -> Result<Self> {
        self.value = Some(resolve::<V>(code)?);
        Ok(self)
    }
}

impl<V: Vocabulary> Builder for CodeBuilder<V> {
    type Target = Code<V>;

    fn build(self) -> Result<Code<V>> {
        builder::require_value_or_children(
            "code",
            self.value.is_some(),
            self.base.has_extension(),
        )?;
        Ok(Code {
            base: self.base,
            value: self.value,
            vocabulary: PhantomData,
        })
    }
}

impl<V: Vocabulary> ElementBuilder for CodeBuilder<V> {
    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl<V: Vocabulary> ToBuilder for Code<V> {
    type Builder = CodeBuilder<V>;

    fn to_builder(&self) -> CodeBuilder<V> {
        CodeBuilder {
            base: self.base.clone(),
            value: self.value.clone(),
            vocabulary: PhantomData,
        }
    }
}

/// Declare a vocabulary enum together with its descriptor and lookup table.
///
/// ```ignore
/// vocabulary! {
///     pub enum NarrativeStatus: Closed("NarrativeStatus", "http://hl7.org/fhir/narrative-status") {
///         Generated = "generated" => "Generated",
///     }
/// }
/// ```
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $openness:ident($vname:literal, $system:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:tt => $display:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::coded::Vocabulary for $name {
            const DESCRIPTOR: &'static $crate::coded::VocabularyDescriptor =
                &$crate::coded::VocabularyDescriptor {
                    name: $vname,
                    system: $system,
                    openness: $crate::coded::Openness::$openness,
                    members: &[$(
                        $crate::coded::Member {
                            name: stringify!($variant),
                            code: $code,
                            display: $display,
                        }
                    ),+],
                };

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            fn display(self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                static INDEX: phf::Map<&'static str, $name> = phf::phf_map! {
                    $($code => $name::$variant),+
                };
                INDEX.get(code).copied()
            }

            fn members() -> &'static [Self] {
                Self::ALL
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::coded::Vocabulary::code(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <$name as $crate::coded::Vocabulary>::from_code(s).ok_or_else(|| {
                    $crate::error::Error::UnknownCode {
                        code: s.to_string(),
                        vocabulary: $vname,
                    }
                })
            }
        }
    };
}

pub(crate) use vocabulary;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{AdministrativeGender, CommonLanguages};

    #[test]
    fn closed_lookup_is_exact_and_case_sensitive() {
        assert!(Code::<AdministrativeGender>::of("female").is_ok());
        assert_eq!(
            Code::<AdministrativeGender>::of("Female").unwrap_err(),
            Error::UnknownCode {
                code: "Female".to_string(),
                vocabulary: "AdministrativeGender",
            }
        );
        assert!(Code::<AdministrativeGender>::of(" female").is_err());
    }

    #[test]
    fn open_vocabulary_accepts_unlisted_codes() {
        let code = Code::<CommonLanguages>::of("tlh").unwrap();
        assert_eq!(code.value(), Some("tlh"));
        assert_eq!(code.member(), None);

        let listed = Code::<CommonLanguages>::of("de").unwrap();
        assert_eq!(listed.member(), Some(CommonLanguages::De));
    }

    #[test]
    fn open_vocabulary_still_checks_the_code_pattern() {
        assert!(matches!(
            Code::<CommonLanguages>::of("en  US"),
            Err(Error::InvalidCode { .. })
        ));
        assert!(Code::<CommonLanguages>::of("").is_err());
    }

    #[test]
    fn member_constructor_is_infallible() {
        let code = Code::from(AdministrativeGender::Other);
        assert_eq!(code.value(), Some("other"));
        assert_eq!(code, AdministrativeGender::Other);
        assert_eq!(code.to_string(), "other");
    }

    #[test]
    fn builder_exposes_both_setters() {
        let from_member = Code::<AdministrativeGender>::builder()
            .value(AdministrativeGender::Male)
            .build()
            .unwrap();
        let from_wire = Code::<AdministrativeGender>::builder()
            .code("male")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(from_member, from_wire);
        assert!(Code::<AdministrativeGender>::builder().code("m").is_err());
    }

    #[test]
    fn descriptor_lookup() {
        let d = AdministrativeGender::DESCRIPTOR;
        assert!(d.is_closed());
        assert_eq!(d.find("unknown").map(|m| m.name), Some("Unknown"));
        assert!(!d.contains("UNKNOWN"));
        assert!(!CommonLanguages::DESCRIPTOR.is_closed());
    }
}
