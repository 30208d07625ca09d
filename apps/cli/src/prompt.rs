//! # Confirmation Prompts
//!
//! Destructive commands ask before calling the store. The store itself
//! never prompts; it only exposes the checks (`ensure_item_removable`,
//! `booking_covering`) a command runs before asking.

use std::io::{self, BufRead, Write};

/// Asks the user to confirm an action.
pub trait Confirm {
    /// Returns `true` when the action should proceed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Always proceeds (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Prompts on a writer and reads a `y`/`yes` answer from a reader.
///
/// Anything else, including end of input or a read error, declines.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompt { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompts on stderr, reads stdin.
    pub fn stdin() -> Self {
        LinePrompt::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if write!(self.output, "{} [y/N] ", message).and_then(|_| self.output.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

/// Answers from a fixed list, recording every question. Used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    pub answers: Vec<bool>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedConfirm {
    pub fn answering(answers: &[bool]) -> Self {
        ScriptedConfirm {
            answers: answers.iter().rev().copied().collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answers.pop().unwrap_or(false)
    }
}
