//! Line-oriented chat console for `remote-test`.

use std::io::{BufRead as _, Write as _};

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;

use crate::application::ports::ChatConsole;
use crate::output::OutputContext;

/// Reads operator input from stdin and prints agent replies on stdout.
///
/// Works with piped input too; end of input ends the conversation.
pub struct TerminalChat<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalChat<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ChatConsole for TerminalChat<'_> {
    fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        if self.ctx.is_tty {
            print!("{}: ", prompt.style(self.ctx.styles.bold));
            std::io::stdout().flush().context("flushing prompt")?;
        }
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_reply(&self, text: &str) {
        println!("{}", text.style(self.ctx.styles.reply));
    }
}
