//! Integer Type Converter
//!
//! Converts integer data between the application and the storage layer.
//! The storage-bound path validates that input is numeric; the
//! storage-to-application paths trust the driver and cast permissively,
//! except for the batch path which re-validates each present field.

use super::numeric;
use super::types::{BindingKind, ColumnType, Row, TypeError, Value};

#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerType;

impl IntegerType {
    pub fn new() -> Self {
        IntegerType
    }

    fn invalid(found: &'static str) -> TypeError {
        TypeError::InvalidInput {
            found,
            target: "integer",
        }
    }
}

impl ColumnType for IntegerType {
    type Application = i64;

    fn to_storage(&self, value: &Value) -> Result<Option<Value>, TypeError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            v if numeric::value_is_numeric(v) => Ok(Some(Value::Int(numeric::cast_int(v)))),
            v => Err(Self::invalid(v.type_name())),
        }
    }

    fn from_storage(&self, value: &Value) -> Option<i64> {
        match value {
            Value::Null => None,
            v => Some(numeric::cast_int(v)),
        }
    }

    fn many_from_storage(&self, row: &mut Row, fields: &[&str]) -> Result<(), TypeError> {
        for field in fields {
            let Some(value) = row.get(*field) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            if !numeric::value_is_numeric(value) {
                return Err(Self::invalid(value.type_name()));
            }
            let converted = Value::Int(numeric::cast_int(value));
            row.insert((*field).to_string(), converted);
        }
        Ok(())
    }

    fn binding_kind(&self, _value: &Value) -> BindingKind {
        BindingKind::Integer
    }

    fn marshal(&self, value: &Value) -> Option<i64> {
        match value {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            v if numeric::value_is_numeric(v) => Some(numeric::cast_int(v)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_to_storage_null_and_empty() {
        let t = IntegerType::new();
        assert_eq!(t.to_storage(&Value::Null), Ok(None));
        assert_eq!(t.to_storage(&Value::from("")), Ok(None));
    }

    #[test]
    fn test_to_storage_numeric() {
        let t = IntegerType::new();
        assert_eq!(t.to_storage(&Value::Int(5)), Ok(Some(Value::Int(5))));
        assert_eq!(t.to_storage(&Value::from("5")), Ok(Some(Value::Int(5))));
        assert_eq!(t.to_storage(&Value::Float(3.9)), Ok(Some(Value::Int(3))));
        assert_eq!(t.to_storage(&Value::from("3.14")), Ok(Some(Value::Int(3))));
    }

    #[test]
    fn test_to_storage_non_numeric_fails() {
        let t = IntegerType::new();
        assert_eq!(
            t.to_storage(&Value::from("abc")),
            Err(TypeError::InvalidInput {
                found: "string",
                target: "integer",
            })
        );
        // Booleans are not numeric on the validated path.
        assert!(t.to_storage(&Value::Bool(true)).is_err());
        assert!(t.to_storage(&Value::Array(vec![])).is_err());
    }

    #[test]
    fn test_from_storage() {
        let t = IntegerType::new();
        assert_eq!(t.from_storage(&Value::Null), None);
        assert_eq!(t.from_storage(&Value::from("5")), Some(5));
        assert_eq!(t.from_storage(&Value::Int(7)), Some(7));
        // Trusted path casts permissively instead of erroring.
        assert_eq!(t.from_storage(&Value::from("12abc")), Some(12));
    }

    #[test]
    fn test_many_from_storage_converts_named_fields() {
        let t = IntegerType::new();
        let mut row: Row = IndexMap::new();
        row.insert("a".to_string(), Value::from("5"));
        row.insert("b".to_string(), Value::from("untouched"));
        t.many_from_storage(&mut row, &["a", "missing"]).unwrap();
        assert_eq!(row["a"], Value::Int(5));
        assert_eq!(row["b"], Value::from("untouched"));
    }

    #[test]
    fn test_many_from_storage_validates_present_fields() {
        let t = IntegerType::new();
        let mut row: Row = IndexMap::new();
        row.insert("a".to_string(), Value::from("5"));
        row.insert("b".to_string(), Value::from("x"));
        let err = t.many_from_storage(&mut row, &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidInput {
                found: "string",
                target: "integer",
            }
        );
    }

    #[test]
    fn test_many_from_storage_skips_null_fields() {
        let t = IntegerType::new();
        let mut row: Row = IndexMap::new();
        row.insert("a".to_string(), Value::Null);
        t.many_from_storage(&mut row, &["a"]).unwrap();
        assert_eq!(row["a"], Value::Null);
    }

    #[test]
    fn test_binding_kind() {
        let t = IntegerType::new();
        assert_eq!(t.binding_kind(&Value::Null), BindingKind::Integer);
        assert_eq!(t.binding_kind(&Value::from("x")), BindingKind::Integer);
    }

    #[test]
    fn test_marshal() {
        let t = IntegerType::new();
        assert_eq!(t.marshal(&Value::Null), None);
        assert_eq!(t.marshal(&Value::from("")), None);
        assert_eq!(t.marshal(&Value::from("12")), Some(12));
        assert_eq!(t.marshal(&Value::from("12.5")), Some(12));
        // Non-numeric input degrades silently, no error.
        assert_eq!(t.marshal(&Value::from("abc")), None);
        assert_eq!(t.marshal(&Value::Bool(true)), None);
    }
}
