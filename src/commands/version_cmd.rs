// src/commands/version_cmd.rs
use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult};

/// Prints the crate version. Registered under both `version` and `about`,
/// which exercises the alias dedup in the help listing.
pub struct VersionCommand;

#[async_trait]
impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn provider(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(format!("castkit {}\n", env!("CARGO_PKG_VERSION")))
    }
}
