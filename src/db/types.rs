//! Shared Types for the Converter Layer
//!
//! The `Value` enum models the untyped scalars that cross the
//! application/storage boundary, plus the non-scalar shapes that converters
//! must reject. `Row` is the named-field mapping used by the batch paths.

use indexmap::IndexMap;
use thiserror::Error;

/// An untyped value crossing the application/storage boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Scalars are the only shapes a converter will touch; arrays and
    /// objects are rejected up front.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// A row of named fields, as produced by the storage layer.
pub type Row = IndexMap<String, Value>;

/// How the statement-binding API should treat a bound parameter.
/// Fixed per converter, independent of the value being bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Integer,
    Str,
}

/// Errors raised by the converter layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Non-scalar input, or non-numeric input where numeric is required.
    /// Surfaced immediately to the caller, never retried.
    #[error("cannot convert value of type `{found}` to {target}")]
    InvalidInput {
        found: &'static str,
        target: &'static str,
    },

    /// Raised at the point a feature is enabled, not at use time.
    #[error("cannot enable locale parsing: {0}")]
    Configuration(String),
}

/// Locale-aware number parsing capability, injected into `DecimalType`.
///
/// Replaces a dynamic class-name plugin point: the host supplies whatever
/// parser matches its locale rules, and the converter only ever calls
/// `parse_float`.
pub trait NumberParser: Send + Sync {
    /// Parse a localized numeric string. Returns `None` when the input does
    /// not parse under the configured locale.
    fn parse_float(&self, input: &str) -> Option<f64>;
}

/// Common contract for column type converters.
pub trait ColumnType: Send + Sync {
    /// The in-memory typed value used by business logic.
    type Application;

    /// Convert an application value into the storage representation.
    /// Null and empty-string inputs convert to `None`.
    fn to_storage(&self, value: &Value) -> Result<Option<Value>, TypeError>;

    /// Convert a storage value back to the application type. No validation:
    /// the storage layer is trusted.
    fn from_storage(&self, value: &Value) -> Option<Self::Application>;

    /// Apply the `from_storage` coercion in place to the named fields of a
    /// row, skipping fields that are absent.
    fn many_from_storage(&self, row: &mut Row, fields: &[&str]) -> Result<(), TypeError>;

    /// The parameter tag the statement-binding API should use.
    fn binding_kind(&self, value: &Value) -> BindingKind;

    /// Convert untrusted external input (e.g. form data) permissively:
    /// anything that is not numeric degrades to `None` without erroring.
    fn marshal(&self, value: &Value) -> Option<Self::Application>;
}
