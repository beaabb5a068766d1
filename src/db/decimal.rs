//! Decimal Type Converter
//!
//! Converts decimal data between the application and the storage layer.
//! Decimals travel to storage as strings so the driver can bind them
//! without losing precision: numeric strings pass through unchanged, other
//! scalars are rendered with a fixed six-decimal format (never scientific
//! notation).
//!
//! Marshalling can optionally route string input through an injected
//! locale-aware `NumberParser`. The parser is supplied at construction;
//! enabling the toggle without one is a configuration error.

use std::fmt;
use std::sync::Arc;

use super::numeric;
use super::types::{BindingKind, ColumnType, NumberParser, Row, TypeError, Value};

#[derive(Default)]
pub struct DecimalType {
    locale_parser: Option<Arc<dyn NumberParser>>,
    use_locale_parser: bool,
}

impl DecimalType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a converter with a locale-aware parser available. Parsing is
    /// still off until `use_locale_parser(true)`.
    pub fn with_parser(parser: Arc<dyn NumberParser>) -> Self {
        DecimalType {
            locale_parser: Some(parser),
            use_locale_parser: false,
        }
    }

    /// Toggle locale-aware parsing of marshalled string input.
    ///
    /// Fails here, at configuration time, when no parser was injected, so
    /// that a misconfigured host cannot get as far as `marshal`.
    pub fn use_locale_parser(&mut self, enable: bool) -> Result<&mut Self, TypeError> {
        if enable && self.locale_parser.is_none() {
            return Err(TypeError::Configuration(
                "no number parser is configured".to_string(),
            ));
        }
        self.use_locale_parser = enable;
        Ok(self)
    }

    fn invalid(found: &'static str) -> TypeError {
        TypeError::InvalidInput {
            found,
            target: "decimal",
        }
    }
}

impl fmt::Debug for DecimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecimalType")
            .field("has_parser", &self.locale_parser.is_some())
            .field("use_locale_parser", &self.use_locale_parser)
            .finish()
    }
}

impl ColumnType for DecimalType {
    type Application = f64;

    fn to_storage(&self, value: &Value) -> Result<Option<Value>, TypeError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            v if !v.is_scalar() => Err(Self::invalid(v.type_name())),
            Value::String(s) => {
                if numeric::is_numeric(s) {
                    // Already in wire form, pass through untouched.
                    Ok(Some(Value::String(s.clone())))
                } else {
                    Err(Self::invalid("string"))
                }
            }
            v => Ok(Some(Value::String(format!(
                "{:.6}",
                numeric::cast_float(v)
            )))),
        }
    }

    fn from_storage(&self, value: &Value) -> Option<f64> {
        match value {
            Value::Null => None,
            v => Some(numeric::cast_float(v)),
        }
    }

    // Unlike the integer converter, this does not validate present fields.
    fn many_from_storage(&self, row: &mut Row, fields: &[&str]) -> Result<(), TypeError> {
        for field in fields {
            let Some(value) = row.get(*field) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let converted = Value::Float(numeric::cast_float(value));
            row.insert((*field).to_string(), converted);
        }
        Ok(())
    }

    fn binding_kind(&self, _value: &Value) -> BindingKind {
        BindingKind::Str
    }

    fn marshal(&self, value: &Value) -> Option<f64> {
        match value {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) if self.use_locale_parser => {
                self.locale_parser.as_ref()?.parse_float(s)
            }
            v if numeric::value_is_numeric(v) => Some(numeric::cast_float(v)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    /// Test parser for a comma-decimal locale.
    struct CommaParser;

    impl NumberParser for CommaParser {
        fn parse_float(&self, input: &str) -> Option<f64> {
            input.replace('.', "").replace(',', ".").parse().ok()
        }
    }

    #[test]
    fn test_to_storage_null_and_empty() {
        let t = DecimalType::new();
        assert_eq!(t.to_storage(&Value::Null), Ok(None));
        assert_eq!(t.to_storage(&Value::from("")), Ok(None));
    }

    #[test]
    fn test_to_storage_numeric_string_unchanged() {
        let t = DecimalType::new();
        assert_eq!(
            t.to_storage(&Value::from("3.14")),
            Ok(Some(Value::from("3.14")))
        );
        assert_eq!(
            t.to_storage(&Value::from("1e3")),
            Ok(Some(Value::from("1e3")))
        );
    }

    #[test]
    fn test_to_storage_fixed_format() {
        let t = DecimalType::new();
        assert_eq!(
            t.to_storage(&Value::Float(3.14)),
            Ok(Some(Value::from("3.140000")))
        );
        assert_eq!(
            t.to_storage(&Value::Int(5)),
            Ok(Some(Value::from("5.000000")))
        );
        assert_eq!(
            t.to_storage(&Value::Bool(true)),
            Ok(Some(Value::from("1.000000")))
        );
    }

    #[test]
    fn test_to_storage_invalid_input() {
        let t = DecimalType::new();
        assert_eq!(
            t.to_storage(&Value::from("abc")),
            Err(TypeError::InvalidInput {
                found: "string",
                target: "decimal",
            })
        );
        assert_eq!(
            t.to_storage(&Value::Array(vec![])),
            Err(TypeError::InvalidInput {
                found: "array",
                target: "decimal",
            })
        );
    }

    #[test]
    fn test_from_storage() {
        let t = DecimalType::new();
        assert_eq!(t.from_storage(&Value::Null), None);
        assert_eq!(t.from_storage(&Value::from("5")), Some(5.0));
        assert_eq!(t.from_storage(&Value::from("2.5")), Some(2.5));
        assert_eq!(t.from_storage(&Value::Int(3)), Some(3.0));
    }

    #[test]
    fn test_many_from_storage_does_not_validate() {
        let t = DecimalType::new();
        let mut row: Row = IndexMap::new();
        row.insert("a".to_string(), Value::from("5"));
        row.insert("b".to_string(), Value::from("x"));
        t.many_from_storage(&mut row, &["a", "b", "missing"]).unwrap();
        assert_eq!(row["a"], Value::Float(5.0));
        // Non-numeric text degrades to zero instead of erroring.
        assert_eq!(row["b"], Value::Float(0.0));
    }

    #[test]
    fn test_binding_kind() {
        let t = DecimalType::new();
        assert_eq!(t.binding_kind(&Value::Float(1.0)), BindingKind::Str);
    }

    #[test]
    fn test_marshal() {
        let t = DecimalType::new();
        assert_eq!(t.marshal(&Value::Null), None);
        assert_eq!(t.marshal(&Value::from("")), None);
        assert_eq!(t.marshal(&Value::from("12.5")), Some(12.5));
        assert_eq!(t.marshal(&Value::Int(4)), Some(4.0));
        assert_eq!(t.marshal(&Value::from("abc")), None);
        assert_eq!(t.marshal(&Value::Bool(true)), None);
    }

    #[test]
    fn test_use_locale_parser_requires_parser() {
        let mut t = DecimalType::new();
        let err = t.use_locale_parser(true).unwrap_err();
        assert!(matches!(err, TypeError::Configuration(_)));
        // Disabling is always allowed.
        assert!(t.use_locale_parser(false).is_ok());
    }

    #[test]
    fn test_marshal_with_locale_parser() {
        let mut t = DecimalType::with_parser(Arc::new(CommaParser));
        t.use_locale_parser(true).unwrap();
        assert_eq!(t.marshal(&Value::from("1.234,5")), Some(1234.5));
        assert_eq!(t.marshal(&Value::from("not a number")), None);
        // Non-string input is unaffected by the toggle.
        assert_eq!(t.marshal(&Value::Float(2.5)), Some(2.5));
    }

    #[test]
    fn test_marshal_parser_present_but_disabled() {
        let t = DecimalType::with_parser(Arc::new(CommaParser));
        assert_eq!(t.marshal(&Value::from("12.5")), Some(12.5));
    }
}
