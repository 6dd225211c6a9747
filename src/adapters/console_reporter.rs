use console::style;

use crate::ports::Reporter;

/// Prints task progress to stdout and warnings to stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn step(&self, index: usize, title: &str) {
        println!("{}", style(format!("{}.. {}", index, title)).cyan());
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", style("⚠️  Warning:").yellow().bold(), message);
    }
}
