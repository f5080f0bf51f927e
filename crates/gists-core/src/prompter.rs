//! Interactive prompts.
//!
//! Commands ask questions through the [`Prompter`] trait so tests can script
//! the answers with [`StubPrompter`].

use std::sync::{Mutex, PoisonError};

use anyhow::Result;

/// Source of answers to interactive questions.
pub trait Prompter: Send + Sync + std::fmt::Debug {
    /// Ask for a line of free text. The answer is returned as typed.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Ask for a secret without echoing it.
    fn password(&self, prompt: &str) -> Result<String>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        Ok(dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn password(&self, prompt: &str) -> Result<String> {
        Ok(dialoguer::Password::new().with_prompt(prompt).interact()?)
    }
}

/// Prompter that replays queued answers.
///
/// Once the queue is empty every question is answered with an empty string.
#[derive(Debug, Default)]
pub struct StubPrompter {
    answers: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl StubPrompter {
    /// Stub that answers with `answers`, in order.
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue one more answer.
    pub fn push_answer(&self, answer: impl Into<String>) {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(answer.into());
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn next(&self, prompt: &str) -> String {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());
        let mut answers = self.answers.lock().unwrap_or_else(PoisonError::into_inner);
        if answers.is_empty() {
            String::new()
        } else {
            answers.remove(0)
        }
    }
}

impl Prompter for StubPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        Ok(self.next(prompt))
    }

    fn password(&self, prompt: &str) -> Result<String> {
        Ok(self.next(prompt))
    }
}
