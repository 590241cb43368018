//! Line-oriented console collaborators.
//!
//! Everything the entry builder asks or tells the user goes through
//! [`LinePrompt`]. The terminal implementation wraps `dialoguer`; the scripted
//! one replays canned answers, which lets the whole interview run in tests.

use super::error::LogbookError;
use super::messages::Message;
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::collections::VecDeque;

pub trait LinePrompt {
    /// Asks for one line of text. Empty answers are allowed.
    fn read_line(&mut self, prompt: &Message) -> Result<String>;

    /// Asks a yes/no question. Only `y` (any case, surrounding whitespace
    /// ignored) counts as yes.
    fn confirm(&mut self, prompt: &Message) -> Result<bool> {
        Ok(self.read_line(prompt)?.trim().eq_ignore_ascii_case("y"))
    }

    /// Shows a status line.
    fn notify(&mut self, message: &Message);

    /// Shows a line about input that has to be entered again.
    fn warn(&mut self, message: &Message);

    /// Reports a failure the run recovers from.
    fn error(&mut self, message: &Message);
}

/// Interactive terminal prompt.
pub struct ConsolePrompt {
    theme: ColorfulTheme,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePrompt for ConsolePrompt {
    fn read_line(&mut self, prompt: &Message) -> Result<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn confirm(&mut self, prompt: &Message) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme).with_prompt(prompt.to_string()).default(false).interact()?)
    }

    fn notify(&mut self, message: &Message) {
        msg_print!(message);
    }

    fn warn(&mut self, message: &Message) {
        msg_warning!(message);
    }

    fn error(&mut self, message: &Message) {
        msg_error!(message);
    }
}

/// Replays a fixed list of answers and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    prompts: Vec<Message>,
    notices: Vec<Message>,
    warnings: Vec<Message>,
    errors: Vec<Message>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts asked so far, in order.
    pub fn prompts(&self) -> &[Message] {
        &self.prompts
    }

    pub fn notices(&self) -> &[Message] {
        &self.notices
    }

    pub fn warnings(&self) -> &[Message] {
        &self.warnings
    }

    pub fn errors(&self) -> &[Message] {
        &self.errors
    }

    /// Answers that were never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LinePrompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &Message) -> Result<String> {
        self.prompts.push(prompt.clone());
        self.answers.pop_front().ok_or_else(|| LogbookError::InputExhausted.into())
    }

    fn notify(&mut self, message: &Message) {
        self.notices.push(message.clone());
    }

    fn warn(&mut self, message: &Message) {
        self.warnings.push(message.clone());
    }

    fn error(&mut self, message: &Message) {
        self.errors.push(message.clone());
    }
}
