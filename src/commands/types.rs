// src/commands/types.rs
use async_trait::async_trait;
use serde::Serialize;

/// One entry of the command listing: a callable name and the identifier of
/// the implementation backing it. Several names may share a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    pub name: String,
    pub provider: String,
}

/// Command execution result.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn error(stderr: String) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            exit_code: 1,
        }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }
}

/// Command execution context.
pub struct CommandContext {
    pub args: Vec<String>,
    /// Snapshot of the registry's entries, for commands that report on the
    /// registry itself.
    pub commands: Vec<CommandEntry>,
}

impl CommandContext {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            commands: Vec::new(),
        }
    }
}

/// Command trait.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Identifier of the implementation, shown in listings. Aliases of the
    /// same command report the same provider.
    fn provider(&self) -> &'static str;

    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}
