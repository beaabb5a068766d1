// src/commands/mod.rs
pub mod help_cmd;
pub mod registry;
pub mod types;
pub mod version_cmd;

pub use help_cmd::HelpCommand;
pub use registry::{default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandEntry, CommandResult};
pub use version_cmd::VersionCommand;
