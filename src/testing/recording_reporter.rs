use std::cell::RefCell;

use crate::ports::Reporter;

/// Collects progress lines and warnings instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    steps: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> Vec<String> {
        self.steps.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn step(&self, index: usize, title: &str) {
        self.steps.borrow_mut().push(format!("{}.. {}", index, title));
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
