//! Console prompt I/O backed by dialoguer.

use std::io;

use console::style;
use dialoguer::Input;

use terrapin_core::prompt::Prompter;

/// Interactive terminal implementation of the core prompt seam.
///
/// Prompts come through dialoguer so the user gets line editing; empty input
/// is allowed because the prompt text already displays the default.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn read_reply(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        println!("  {text}");
        Ok(())
    }

    fn warn(&mut self, text: &str) -> io::Result<()> {
        println!("  {} {}", style("!").yellow().bold(), text);
        Ok(())
    }
}
