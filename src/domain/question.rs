//! Interactive question tree producing the same answers a `setup.yaml` would.

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::catalog::{CacheBackend, DatabaseEngine, optional_libraries};
use crate::domain::project_state::DEFAULT_PROJECT_NAME;
use crate::domain::raw_config::RawConfig;
use crate::ports::Prompter;

/// How a question is answered.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    Text { default: Option<&'static str> },
    Boolean { default: bool },
    /// One yes/no per option; answers with the accepted options.
    MultipleChoice { options: Vec<&'static str>, prefix: &'static str },
    /// Pick exactly one option.
    Choice { options: Vec<&'static str> },
    /// Nested questions answered into a mapping.
    Group(Vec<Question>),
}

#[derive(Debug, Clone)]
pub struct Question {
    pub title: &'static str,
    pub prompt: &'static str,
    pub var: &'static str,
    pub kind: QuestionKind,
    /// Optional questions are confirmed before being asked.
    pub required: bool,
}

impl Question {
    fn new(title: &'static str, prompt: &'static str, var: &'static str, kind: QuestionKind) -> Self {
        Self { title, prompt, var, kind, required: true }
    }

    fn optional(self) -> Self {
        Self { required: false, ..self }
    }

    /// Ask the question; `None` when skipped or answered empty.
    pub fn ask(&self, prompter: &dyn Prompter) -> Result<Option<Value>, AppError> {
        if !self.required && !prompter.confirm(self.prompt, false)? {
            return Ok(None);
        }

        let value = match &self.kind {
            QuestionKind::Text { default } => Value::String(prompter.input(self.prompt, *default)?),
            QuestionKind::Boolean { default } => Value::Bool(prompter.confirm(self.prompt, *default)?),
            QuestionKind::MultipleChoice { options, prefix } => {
                let mut chosen = Vec::new();
                for (index, option) in options.iter().enumerate() {
                    let prompt = format!("{}. {} {}", index + 1, prefix, option);
                    if prompter.confirm(&prompt, false)? {
                        chosen.push(Value::from(*option));
                    }
                }
                Value::Sequence(chosen)
            }
            QuestionKind::Choice { options } => {
                let index = prompter.select(self.prompt, options)?;
                let option = options.get(index).ok_or_else(|| {
                    AppError::Prompt(format!("selection {} out of range for '{}'", index, self.prompt))
                })?;
                Value::from(*option)
            }
            QuestionKind::Group(children) => {
                let mut mapping = Mapping::new();
                for child in children {
                    if let Some(answer) = child.ask(prompter)? {
                        mapping.insert(child.var.into(), answer);
                    }
                }
                Value::Mapping(mapping)
            }
        };

        Ok(Some(value).filter(|v| !is_empty_answer(v)))
    }
}

/// A numbered step of the question sequence.
#[derive(Debug, Clone)]
pub enum Step {
    Ask(Question),
    /// Shown instead of a question whose answer is already known.
    Note { title: &'static str, text: String },
}

impl Step {
    fn title(&self) -> &'static str {
        match self {
            Step::Ask(question) => question.title,
            Step::Note { title, .. } => *title,
        }
    }
}

/// Questions asked when no usable `setup.yaml` exists.
pub fn question_steps(project_name: Option<&str>) -> Vec<Step> {
    let name_step = match project_name {
        Some(name) => Step::Note { title: "Project Name", text: format!("Project Name :- {}", name) },
        None => Step::Ask(Question::new(
            "Project Name",
            "Your Project Name",
            "name",
            QuestionKind::Text { default: Some(DEFAULT_PROJECT_NAME) },
        )),
    };

    let text = |prompt, var| Question::new("", prompt, var, QuestionKind::Text { default: None });

    vec![
        name_step,
        Step::Ask(
            Question::new(
                "Install Necessary Libraries",
                "Install Libraries",
                "libraries",
                QuestionKind::MultipleChoice {
                    options: optional_libraries().map(|lib| lib.package).collect(),
                    prefix: "Install",
                },
            )
            .optional(),
        ),
        Step::Ask(Question::new(
            "Static File",
            "Create/Use Static File",
            "static",
            QuestionKind::Boolean { default: true },
        )),
        Step::Ask(Question::new(
            "Template File",
            "Create/Use Template File",
            "template",
            QuestionKind::Boolean { default: true },
        )),
        Step::Ask(Question::new(
            "Media File",
            "Create/Use Media File",
            "media_files",
            QuestionKind::Boolean { default: true },
        )),
        Step::Ask(
            Question::new(
                "Setup Database",
                "Setup Database [Skip To Use Default]",
                "database",
                QuestionKind::Group(vec![
                    Question::new(
                        "",
                        "Database Engine",
                        "engine",
                        QuestionKind::Choice {
                            options: DatabaseEngine::ALL.iter().map(|e| e.key()).collect(),
                        },
                    ),
                    text("Database Name", "name"),
                    text("Database User", "user"),
                    text("Database Password", "password"),
                    text("Database Host", "host"),
                    text("Database Port", "port"),
                ]),
            )
            .optional(),
        ),
        Step::Ask(
            Question::new(
                "Setup Cache",
                "Install Cache",
                "cache",
                QuestionKind::Group(vec![
                    Question::new(
                        "",
                        "Cache Engine",
                        "backend",
                        QuestionKind::Choice {
                            options: CacheBackend::ALL.iter().map(|b| b.key()).collect(),
                        },
                    ),
                    text("Cache Location", "location"),
                ]),
            )
            .optional(),
        ),
    ]
}

/// Run the question sequence and collect non-empty answers.
pub fn enquire(prompter: &dyn Prompter, project_name: Option<&str>) -> Result<RawConfig, AppError> {
    let mut answers = RawConfig::new();
    if let Some(name) = project_name {
        answers.insert("name", name);
    }

    for (index, step) in question_steps(project_name).iter().enumerate() {
        prompter.section(index + 1, step.title());
        match step {
            Step::Note { text, .. } => prompter.note(text),
            Step::Ask(question) => {
                if let Some(answer) = question.ask(prompter)? {
                    answers.insert(question.var, answer);
                }
            }
        }
    }

    Ok(answers)
}

fn is_empty_answer(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.is_empty(),
        _ => false,
    }
}
