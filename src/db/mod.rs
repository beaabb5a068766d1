//! Database Type Converters
//!
//! Marshals values between application-level types and the wire
//! representation a relational driver expects. Each converter is stateless
//! per call and safe to share across tasks.

pub mod decimal;
pub mod integer;
pub mod numeric;
pub mod types;

pub use decimal::DecimalType;
pub use integer::IntegerType;
pub use types::{BindingKind, ColumnType, NumberParser, Row, TypeError, Value};
