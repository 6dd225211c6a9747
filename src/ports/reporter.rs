/// Port for progress output of long-running commands.
pub trait Reporter {
    /// A numbered task is about to run.
    fn step(&self, index: usize, title: &str);

    /// Something went wrong but the command continues.
    fn warn(&self, message: &str);
}
