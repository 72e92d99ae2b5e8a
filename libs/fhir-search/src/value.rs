//! The search parameter value union

use crate::error::{Error, Result};
use crate::prefix::{ComparisonPrefix, SearchValueKind};
use rust_decimal::Decimal;
use tracing::debug;

/// One search value: exactly one kind, plus an optional prefix.
///
/// Values only come out of [`SearchParameterValueBuilder::build`] or the
/// constructors, so the populated fields always form a single kind and the
/// prefix always applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameterValue {
    pub(crate) kind: SearchValueKind,
    pub(crate) prefix: Option<ComparisonPrefix>,
    pub(crate) number: Option<Decimal>,
    pub(crate) system: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) string: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) components: Vec<SearchParameterValue>,
}

impl SearchParameterValue {
    pub fn builder() -> SearchParameterValueBuilder {
        SearchParameterValueBuilder::default()
    }

    pub fn number(number: Decimal) -> Self {
        Self::scalar(SearchValueKind::Number, |v| v.number = Some(number))
    }

    /// A quantity; pass `""` as `system` to search a unit code without a
    /// system (`5||mg`).
    pub fn quantity(number: Decimal, system: impl Into<String>, code: impl Into<String>) -> Self {
        let (system, code) = (system.into(), code.into());
        Self::scalar(SearchValueKind::Quantity, |v| {
            v.number = Some(number);
            v.system = Some(system);
            v.code = Some(code);
        })
    }

    /// A token in an explicit system. An empty `system` means "no system"
    /// and encodes as `|code`.
    pub fn token(system: impl Into<String>, code: impl Into<String>) -> Self {
        let (system, code) = (system.into(), code.into());
        Self::scalar(SearchValueKind::Token, |v| {
            v.system = Some(system);
            v.code = Some(code);
        })
    }

    /// A token matching the code in any system.
    pub fn code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self::scalar(SearchValueKind::Token, |v| v.code = Some(code))
    }

    pub fn string(string: impl Into<String>) -> Self {
        let string = string.into();
        Self::scalar(SearchValueKind::String, |v| v.string = Some(string))
    }

    pub fn date(date: impl Into<String>) -> Self {
        let date = date.into();
        Self::scalar(SearchValueKind::Date, |v| v.date = Some(date))
    }

    /// A composite of sub-values; fails when `components` is empty.
    pub fn composite(components: impl IntoIterator<Item = SearchParameterValue>) -> Result<Self> {
        Self::builder().components(components).build()
    }

    fn scalar(kind: SearchValueKind, fill: impl FnOnce(&mut Self)) -> Self {
        let mut value = Self {
            kind,
            prefix: None,
            number: None,
            system: None,
            code: None,
            string: None,
            date: None,
            components: Vec::new(),
        };
        fill(&mut value);
        value
    }

    /// Copy of this value with `prefix`, if the prefix applies to its kind.
    pub fn with_prefix(mut self, prefix: ComparisonPrefix) -> Result<Self> {
        check_prefix(prefix, self.kind)?;
        self.prefix = Some(prefix);
        Ok(self)
    }

    pub fn kind(&self) -> SearchValueKind {
        self.kind
    }

    pub fn prefix(&self) -> Option<ComparisonPrefix> {
        self.prefix
    }

    pub fn value_number(&self) -> Option<&Decimal> {
        self.number.as_ref()
    }

    pub fn value_system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    pub fn value_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn value_string(&self) -> Option<&str> {
        self.string.as_deref()
    }

    pub fn value_date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn components(&self) -> &[SearchParameterValue] {
        &self.components
    }
}

fn check_prefix(prefix: ComparisonPrefix, kind: SearchValueKind) -> Result<()> {
    if prefix.is_valid_for(kind) {
        return Ok(());
    }
    let err = Error::PrefixNotApplicable { prefix, kind };
    debug!(error = %err, "rejected search value");
    Err(err)
}

/// Accumulates the fields of a [`SearchParameterValue`] and checks that
/// they form one kind.
#[derive(Debug, Clone, Default)]
pub struct SearchParameterValueBuilder {
    prefix: Option<ComparisonPrefix>,
    number: Option<Decimal>,
    system: Option<String>,
    code: Option<String>,
    string: Option<String>,
    date: Option<String>,
    components: Vec<SearchParameterValue>,
}

impl SearchParameterValueBuilder {
    pub fn prefix(mut self, prefix: ComparisonPrefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn number(mut self, number: Decimal) -> Self {
        self.number = Some(number);
        self
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn string(mut self, string: impl Into<String>) -> Self {
        self.string = Some(string.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn component(mut self, component: SearchParameterValue) -> Self {
        self.components.push(component);
        self
    }

    pub fn components(
        mut self,
        components: impl IntoIterator<Item = SearchParameterValue>,
    ) -> Self {
        self.components.extend(components);
        self
    }

    fn populated(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.number.is_some() {
            fields.push("number");
        }
        if self.system.is_some() {
            fields.push("system");
        }
        if self.code.is_some() {
            fields.push("code");
        }
        if self.string.is_some() {
            fields.push("string");
        }
        if self.date.is_some() {
            fields.push("date");
        }
        if !self.components.is_empty() {
            fields.push("components");
        }
        fields
    }

    /// The kind the populated fields form, if exactly one.
    fn kind(&self) -> Option<SearchValueKind> {
        let kind = match self.populated().as_slice() {
            ["number"] => SearchValueKind::Number,
            ["number", "system", "code"] => SearchValueKind::Quantity,
            ["code"] | ["system", "code"] => SearchValueKind::Token,
            ["string"] => SearchValueKind::String,
            ["date"] => SearchValueKind::Date,
            ["components"] => SearchValueKind::Composite,
            _ => return None,
        };
        Some(kind)
    }

    pub fn build(self) -> Result<SearchParameterValue> {
        let Some(kind) = self.kind() else {
            let populated = self.populated();
            let err = Error::IncoherentValue {
                fields: if populated.is_empty() {
                    "none".to_string()
                } else {
                    populated.join(", ")
                },
            };
            debug!(error = %err, "rejected search value");
            return Err(err);
        };
        if let Some(prefix) = self.prefix {
            check_prefix(prefix, kind)?;
        }
        Ok(SearchParameterValue {
            kind,
            prefix: self.prefix,
            number: self.number,
            system: self.system,
            code: self.code,
            string: self.string,
            date: self.date,
            components: self.components,
        })
    }
}

impl From<&SearchParameterValue> for SearchParameterValueBuilder {
    fn from(value: &SearchParameterValue) -> Self {
        Self {
            prefix: value.prefix,
            number: value.number,
            system: value.system.clone(),
            code: value.code.clone(),
            string: value.string.clone(),
            date: value.date.clone(),
            components: value.components.clone(),
        }
    }
}

impl SearchParameterValue {
    /// Re-derive a builder holding every field of this value.
    pub fn to_builder(&self) -> SearchParameterValueBuilder {
        SearchParameterValueBuilder::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_from_populated_fields() {
        let quantity = SearchParameterValue::builder()
            .number(Decimal::from(5))
            .system("http://unitsofmeasure.org")
            .code("mg")
            .build()
            .unwrap();
        assert_eq!(quantity.kind(), SearchValueKind::Quantity);

        let token = SearchParameterValue::builder()
            .system("")
            .code("active")
            .build()
            .unwrap();
        assert_eq!(token.kind(), SearchValueKind::Token);
        assert_eq!(token.value_system(), Some(""));

        let bare = SearchParameterValue::builder().code("active").build().unwrap();
        assert_eq!(bare.kind(), SearchValueKind::Token);
        assert_eq!(bare.value_system(), None);
    }

    #[test]
    fn mixed_fields_are_incoherent() {
        let err = SearchParameterValue::builder()
            .number(Decimal::ONE)
            .date("2020")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::IncoherentValue {
                fields: "number, date".to_string()
            }
        );

        let err = SearchParameterValue::builder()
            .string("x")
            .component(SearchParameterValue::string("a"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::IncoherentValue { .. }));

        assert_eq!(
            SearchParameterValue::builder().build().unwrap_err(),
            Error::IncoherentValue {
                fields: "none".to_string()
            }
        );
    }

    #[test]
    fn system_without_code_is_incoherent() {
        assert!(SearchParameterValue::builder()
            .system("http://loinc.org")
            .build()
            .is_err());
        assert!(SearchParameterValue::builder()
            .number(Decimal::ONE)
            .code("mg")
            .build()
            .is_err());
    }

    #[test]
    fn prefix_must_fit_the_kind() {
        let err = SearchParameterValue::builder()
            .prefix(ComparisonPrefix::Gt)
            .string("abc")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::PrefixNotApplicable {
                prefix: ComparisonPrefix::Gt,
                kind: SearchValueKind::String,
            }
        );
        assert!(SearchParameterValue::date("2020-01")
            .with_prefix(ComparisonPrefix::Sa)
            .is_ok());
        assert!(SearchParameterValue::code("x")
            .with_prefix(ComparisonPrefix::Ge)
            .is_err());
    }

    #[test]
    fn to_builder_round_trips() {
        let value = SearchParameterValue::quantity(Decimal::new(54, 1), "", "mg")
            .with_prefix(ComparisonPrefix::Le)
            .unwrap();
        assert_eq!(value.to_builder().build().unwrap(), value);
    }
}
