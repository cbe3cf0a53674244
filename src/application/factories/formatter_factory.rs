use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters from an [`OutputFormat`]
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for `format`
    ///
    /// # Examples
    /// ```
    /// use pnpm_catalog::application::dto::OutputFormat;
    /// use pnpm_catalog::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress line shown while the report is rendered
    ///
    /// # Examples
    /// ```
    /// use pnpm_catalog::application::dto::OutputFormat;
    /// use pnpm_catalog::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::WorkspaceReportBuilder;
    use crate::workspace_analysis::domain::WorkspaceSnapshot;

    #[test]
    fn test_created_formatters_render_their_format() {
        let report = WorkspaceReportBuilder::build(&WorkspaceSnapshot::default(), vec![]);

        let json = FormatterFactory::create(OutputFormat::Json)
            .format(&report)
            .unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = FormatterFactory::create(OutputFormat::Markdown)
            .format(&report)
            .unwrap();
        assert!(markdown.starts_with("# "));
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown report..."
        );
    }
}
