//! Console Output Sink
//!
//! Line-oriented output buffer with two modes:
//! - `Styled` (default): inline markup tags such as `<info>...</info>` are
//!   rendered for a plain terminal by stripping them.
//! - `Raw`: pass-through for pre-formatted text such as XML.
//!
//! Commands write into a `ConsoleIo` and convert it into a `CommandResult`
//! when done.

use crate::commands::CommandResult;

/// Markup tags recognized in styled mode.
const STYLE_TAGS: &[&str] = &["info", "warning", "error", "success"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Styled,
    Raw,
}

#[derive(Debug)]
pub struct ConsoleIo {
    out: String,
    err: String,
    mode: OutputMode,
}

impl ConsoleIo {
    pub fn new() -> Self {
        ConsoleIo {
            out: String::new(),
            err: String::new(),
            mode: OutputMode::Styled,
        }
    }

    pub fn set_output_as(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    /// Write a line to standard output, followed by a newline.
    pub fn out(&mut self, text: &str) {
        let rendered = match self.mode {
            OutputMode::Styled => strip_style_tags(text),
            OutputMode::Raw => text.to_string(),
        };
        self.out.push_str(&rendered);
        self.out.push('\n');
    }

    /// Write a blank line.
    pub fn nl(&mut self) {
        self.out.push('\n');
    }

    /// Write a line to standard error.
    pub fn err(&mut self, text: &str) {
        self.err.push_str(text);
        self.err.push('\n');
    }

    pub fn stdout(&self) -> &str {
        &self.out
    }

    pub fn stderr(&self) -> &str {
        &self.err
    }

    pub fn into_result(self, exit_code: i32) -> CommandResult {
        CommandResult::with_exit_code(self.out, self.err, exit_code)
    }
}

impl Default for ConsoleIo {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove recognized style tags, leaving their content. Unknown tags and
/// bare angle brackets pass through untouched.
fn strip_style_tags(text: &str) -> String {
    let mut result = text.to_string();
    for tag in STYLE_TAGS {
        result = result.replace(&format!("<{}>", tag), "");
        result = result.replace(&format!("</{}>", tag), "");
    }
    result
}
