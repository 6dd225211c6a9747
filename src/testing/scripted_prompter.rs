//! Test double for `Prompter` that replays canned answers in order.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Input(String),
    Confirm(bool),
    Select(usize),
}

/// Answers are consumed front to back; a mismatched kind is a test failure.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    sections: RefCell<Vec<String>>,
    notes: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(self, answer: &str) -> Self {
        self.answers.borrow_mut().push_back(Answer::Input(answer.to_string()));
        self
    }

    pub fn confirm(self, answer: bool) -> Self {
        self.answers.borrow_mut().push_back(Answer::Confirm(answer));
        self
    }

    pub fn select(self, index: usize) -> Self {
        self.answers.borrow_mut().push_back(Answer::Select(index));
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    pub fn sections(&self) -> Vec<String> {
        self.sections.borrow().clone()
    }

    pub fn notes(&self) -> Vec<String> {
        self.notes.borrow().clone()
    }

    fn next(&self, prompt: &str) -> Result<Answer, AppError> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        match self.next(prompt)? {
            Answer::Input(answer) if answer.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Answer::Input(answer) => Ok(answer),
            other => Err(AppError::Prompt(format!("expected input for '{}', scripted {:?}", prompt, other))),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        match self.next(prompt)? {
            Answer::Confirm(answer) => Ok(answer),
            other => Err(AppError::Prompt(format!("expected confirm for '{}', scripted {:?}", prompt, other))),
        }
    }

    fn select(&self, prompt: &str, _items: &[&str]) -> Result<usize, AppError> {
        match self.next(prompt)? {
            Answer::Select(index) => Ok(index),
            other => Err(AppError::Prompt(format!("expected select for '{}', scripted {:?}", prompt, other))),
        }
    }

    fn section(&self, index: usize, title: &str) {
        self.sections.borrow_mut().push(format!("{}. {}", index, title));
    }

    fn note(&self, text: &str) {
        self.notes.borrow_mut().push(text.to_string());
    }
}
