//! castkit - console command listing and typed value marshalling
//!
//! Two independent utilities: a command registry with a help listing
//! (text and XML), and database column type converters that marshal values
//! between application types and a driver's wire representation.

pub mod commands;
pub mod console;
pub mod db;

pub use commands::{default_registry, Command, CommandRegistry, CommandResult};
pub use db::{BindingKind, ColumnType, DecimalType, IntegerType, TypeError, Value};
