//! help - Print the list of available commands
//!
//! Usage: help [--xml]
//!
//! Lists every registered command. In text mode, commands registered under
//! several names are listed once, under their shortest name. With --xml the
//! full mapping is emitted as an XML document, one element per name.

use async_trait::async_trait;
use indexmap::IndexMap;

use super::types::{Command, CommandContext, CommandEntry, CommandResult};
use crate::console::{ConsoleIo, OutputMode};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn provider(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let mut xml = false;
        for arg in &ctx.args {
            if arg == "--xml" {
                xml = true;
            } else {
                return CommandResult::with_exit_code(
                    String::new(),
                    format!("help: {}: invalid option\n", arg),
                    2,
                );
            }
        }

        // Sort by name so output is deterministic regardless of
        // registration order.
        let mut entries = ctx.commands.clone();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut io = ConsoleIo::new();
        if xml {
            as_xml(&mut io, &entries);
        } else {
            as_text(&mut io, &entries);
        }
        io.into_result(0)
    }
}

/// Text listing: one line per implementation. Providers backing several
/// names are listed once, under their shortest name (ties keep the earlier
/// sorted name).
fn as_text(io: &mut ConsoleIo, entries: &[CommandEntry]) {
    io.out("<info>Available Commands:</info>");
    io.nl();

    let mut invert: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for entry in entries {
        invert
            .entry(entry.provider.as_str())
            .or_default()
            .push(entry.name.as_str());
    }

    for entry in entries {
        let names = match invert.get_mut(entry.provider.as_str()) {
            Some(names) => names,
            None => continue,
        };
        match names.len() {
            0 => {} // Provider already listed under its shortest name.
            1 => io.out(&format!("- {}", names[0])),
            _ => {
                names.sort_by_key(|name| name.len());
                io.out(&format!("- {}", names[0]));
                names.clear();
            }
        }
    }
    io.nl();

    io.out("To run a command, type <info>`castkit command_name [args|options]`</info>");
    io.out("To get help on a specific command, type <info>`castkit command_name --help`</info>");
    io.nl();
}

/// XML listing: one `shell` element per registered name, no dedup.
fn as_xml(io: &mut ConsoleIo, entries: &[CommandEntry]) {
    let mut doc = String::from("<shells>");
    for entry in entries {
        doc.push_str(&format!(
            "<shell name=\"{}\" call_as=\"{}\" provider=\"{}\" help=\"{} -h\"/>",
            escape_attr(&entry.name),
            escape_attr(&entry.name),
            escape_attr(&entry.provider),
            escape_attr(&entry.name),
        ));
    }
    doc.push_str("</shells>");

    io.set_output_as(OutputMode::Raw);
    io.out(&doc);
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
