use crate::application::read_models::WorkspaceReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the workspace report
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &WorkspaceReport) -> Result<String>;
}
