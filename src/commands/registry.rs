// src/commands/registry.rs
use indexmap::IndexMap;
use std::sync::Arc;

use super::types::{Command, CommandContext, CommandEntry, CommandResult};

/// Name-to-implementation mapping. Insertion order is preserved; the help
/// listing sorts by name itself, so registration order never leaks into
/// output.
pub struct CommandRegistry {
    commands: IndexMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Register a command under its canonical name.
    pub fn register(&mut self, cmd: Arc<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Register a command under an additional name. The listing keeps only
    /// the shortest of a provider's names in text mode.
    pub fn register_as(&mut self, name: &str, cmd: Arc<dyn Command>) {
        self.commands.insert(name.to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    /// Snapshot the mapping as (name, provider) entries for the listing.
    pub fn entries(&self) -> Vec<CommandEntry> {
        self.commands
            .iter()
            .map(|(name, cmd)| CommandEntry {
                name: name.clone(),
                provider: cmd.provider().to_string(),
            })
            .collect()
    }

    /// Dispatch a command by name. Unknown names fail with exit code 127.
    pub async fn run(&self, name: &str, args: Vec<String>) -> CommandResult {
        let Some(cmd) = self.get(name) else {
            return CommandResult::with_exit_code(
                String::new(),
                format!("castkit: {}: command not found\n", name),
                127,
            );
        };
        let mut ctx = CommandContext::new(args);
        ctx.commands = self.entries();
        cmd.execute(ctx).await
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the stock commands: `help`, and `version` with its
/// `about` alias.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(super::help_cmd::HelpCommand));
    let version: Arc<dyn Command> = Arc::new(super::version_cmd::VersionCommand);
    registry.register(version.clone());
    registry.register_as("about", version);
    registry
}
