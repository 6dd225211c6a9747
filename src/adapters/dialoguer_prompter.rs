use console::style;
use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal `Prompter` backed by dialoguer.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|err| AppError::Prompt(format!("{}: {}", prompt, err)))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|err| AppError::Prompt(format!("{}: {}", prompt, err)))
    }

    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|err| AppError::Prompt(format!("{}: {}", prompt, err)))
    }

    fn section(&self, index: usize, title: &str) {
        println!("{}", style(format!("{}. {}", index, title)).green());
    }

    fn note(&self, text: &str) {
        println!("{}", style(text).cyan());
    }
}
