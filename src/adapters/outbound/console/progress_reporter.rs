use crate::ports::outbound::ProgressReporter;
use dashmap::DashMap;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "   {spinner:.green} {msg} [{elapsed}]";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Each running task gets its own indicatif spinner; concurrent promotions
/// share one `MultiProgress` so their lines do not overwrite each other.
pub struct StderrProgressReporter {
    multi: MultiProgress,
    spinners: DashMap<String, ProgressBar>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: DashMap::new(),
        }
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        let pb = self.multi.add(ProgressBar::new_spinner());
        if let Ok(style) = ProgressStyle::with_template(SPINNER_TEMPLATE) {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }

    /// Prints a line without tearing active spinners
    fn print_line(&self, line: String) {
        if self.spinners.is_empty() || self.multi.println(&line).is_err() {
            eprintln!("{}", line);
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_line(message.to_string());
    }

    fn start_task(&self, key: &str, message: &str) {
        let pb = self.spinner(message);
        if let Some(previous) = self.spinners.insert(key.to_string(), pb) {
            previous.finish_and_clear();
        }
    }

    fn finish_task(&self, key: &str) {
        if let Some((_, pb)) = self.spinners.remove(key) {
            pb.finish_and_clear();
            self.multi.remove(&pb);
        }
    }

    fn report_error(&self, message: &str) {
        self.print_line(format!("{}", message.red()));
    }

    fn report_completion(&self, message: &str) {
        self.print_line(format!("{}", message.green()));
    }
}
