use crate::domain::AppError;

/// Port for asking the user typed questions.
pub trait Prompter {
    /// Free-text answer; an empty answer yields `default` when given.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError>;

    /// Yes/no answer.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Index of the chosen item.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, AppError>;

    /// Announce a numbered question section.
    fn section(&self, index: usize, title: &str);

    /// Informational line that needs no answer.
    fn note(&self, text: &str);
}
