//! Prompt/validate helpers over a line-based I/O seam.
//!
//! All user input flows through [`Prompter`]. Every reply is checked for the
//! exit sentinel before anything else; validation failures substitute the
//! displayed default instead of erroring. The tri-state [`Answer`] makes the
//! sentinel an explicit value callers must handle rather than an unwinding
//! control-flow trick.

use std::io;
use std::ops::RangeInclusive;

/// Reserved input token that ends the session immediately (case-insensitive).
pub const EXIT_SENTINEL: &str = "stop!";

/// Line-based user I/O.
///
/// The CLI backs this with dialoguer; tests use a scripted fake.
pub trait Prompter {
    /// Display `prompt` and read one line of input.
    fn read_reply(&mut self, prompt: &str) -> io::Result<String>;

    /// Show an informational message.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Show a recoverable-problem notice. Defaults to [`Prompter::say`].
    fn warn(&mut self, text: &str) -> io::Result<()> {
        self.say(text)
    }
}

/// Outcome of a single prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<T> {
    /// Usable input. A blank line yields the displayed default here.
    Value(T),
    /// Unusable input; the caller substitutes the default and notifies.
    Default,
    /// The exit sentinel; callers unwind without further prompts.
    Exit,
}

/// Read one reply with a displayed default. `None` means the exit sentinel.
fn raw<P: Prompter>(prompter: &mut P, prompt: &str, default: &str) -> io::Result<Option<String>> {
    let line = prompter.read_reply(&format!("{prompt} [{default}]"))?;
    let line = line.trim();
    if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
        return Ok(None);
    }
    if line.is_empty() {
        return Ok(Some(default.to_string()));
    }
    Ok(Some(line.to_string()))
}

/// Free-form text prompt; a blank line takes the default.
pub fn text<P: Prompter>(
    prompter: &mut P,
    prompt: &str,
    default: &str,
) -> io::Result<Answer<String>> {
    Ok(match raw(prompter, prompt, default)? {
        None => Answer::Exit,
        Some(reply) => Answer::Value(reply),
    })
}

/// Integer prompt with parse-failure fallback and inclusive clamping.
///
/// Whatever the input -- blank, non-numeric, negative, overflowing -- the
/// returned value is always within `range` (the default must be too).
pub fn int_in<P: Prompter>(
    prompter: &mut P,
    prompt: &str,
    default: i64,
    range: RangeInclusive<i64>,
) -> io::Result<Answer<i64>> {
    Ok(match raw(prompter, prompt, &default.to_string())? {
        None => Answer::Exit,
        Some(reply) => match reply.parse::<i64>() {
            Ok(value) => Answer::Value(value.clamp(*range.start(), *range.end())),
            Err(_) => Answer::Default,
        },
    })
}

/// Yes/no prompt: loops until an affirmative or negative token, re-prompting
/// on anything else. The sentinel is honored on every attempt. Never returns
/// [`Answer::Default`].
pub fn yes_no<P: Prompter>(prompter: &mut P, prompt: &str) -> io::Result<Answer<bool>> {
    loop {
        let line = prompter.read_reply(&format!("{prompt} (yes/no)"))?;
        let line = line.trim();
        if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
            return Ok(Answer::Exit);
        }
        match line.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Answer::Value(true)),
            "n" | "no" => return Ok(Answer::Value(false)),
            _ => prompter.say("Invalid response. Please enter yes or no.")?,
        }
    }
}
