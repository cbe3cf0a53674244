use crate::application::read_models::WorkspaceReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable reports
///
/// The report is serialized as-is; map key order follows declaration and
/// lockfile order.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &WorkspaceReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::WorkspaceReportBuilder;
    use crate::workspace_analysis::domain::WorkspaceSnapshot;

    #[test]
    fn test_format_produces_valid_json() {
        let mut snapshot = WorkspaceSnapshot::default();
        snapshot
            .catalog
            .insert("typescript".to_string(), "^5.4.0".to_string());
        snapshot
            .catalog
            .insert("react".to_string(), "^18.2.0".to_string());
        let report = WorkspaceReportBuilder::build(&snapshot, vec![]);

        let output = JsonFormatter::new().format(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["metadata"]["toolName"], "pnpm-catalog");
        assert_eq!(value["summary"]["recommendationCount"], 0);
        // Catalog order is preserved, not sorted
        let typescript = output.find("\"typescript\"").unwrap();
        let react = output.find("\"react\"").unwrap();
        assert!(typescript < react);
    }
}
