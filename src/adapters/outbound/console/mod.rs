/// Console adapters for progress output on stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
