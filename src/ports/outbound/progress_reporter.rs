/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr) so the
/// report on stdout stays machine-readable. Implementations are shared
/// between concurrently running promotions and must be `Send + Sync`.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Marks the start of a long-running task identified by `key`
    ///
    /// # Arguments
    /// * `key` - Identifies the task in [`ProgressReporter::finish_task`]
    /// * `message` - What is running
    fn start_task(&self, key: &str, message: &str);

    /// Marks the end of the task started under `key`
    fn finish_task(&self, key: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
