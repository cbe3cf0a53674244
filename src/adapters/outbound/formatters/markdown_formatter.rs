use crate::application::read_models::{
    DeclaredDependencyView, LiveDuplicateView, ManifestDuplicateView, RecommendationView,
    SpecifierView, WorkspaceReport,
};
use crate::application::dto::PromotionOutcome;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use indexmap::IndexMap;

/// MarkdownFormatter adapter for human-readable reports
///
/// Renders one section per view. Package names link to their npm page.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Markdown hyperlink to the package's npm page
    ///
    /// Scoped names keep their `@scope/` prefix; npm accepts it unencoded.
    fn package_link(name: &str) -> String {
        format!(
            "[{}](https://www.npmjs.com/package/{})",
            Self::escape_markdown_table_cell(name),
            name
        )
    }

    fn consumer_list(consumers: &[String]) -> String {
        Self::escape_markdown_table_cell(&consumers.join(", "))
    }

    fn specifier_lines(specifiers: &[SpecifierView]) -> String {
        specifiers
            .iter()
            .map(|s| {
                format!(
                    "`{}` ({})",
                    Self::escape_markdown_table_cell(&s.specifier),
                    Self::consumer_list(&s.consumers)
                )
            })
            .collect::<Vec<_>>()
            .join("<br>")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &WorkspaceReport) {
        output.push_str("# pnpm Workspace Dependency Report\n\n");
        output.push_str(&format!(
            "- Workspace: `{}`\n- Generated: {} by {} {}\n- Members: {}, declared dependencies: {}, resolved packages: {}\n\n",
            report.metadata.workspace_root,
            report.metadata.timestamp,
            report.metadata.tool_name,
            report.metadata.tool_version,
            report.summary.member_count,
            report.summary.declared_dependency_count,
            report.summary.resolved_package_count,
        ));
    }

    fn render_promotions(&self, output: &mut String, promotions: &[PromotionOutcome]) {
        output.push_str("## Catalog Promotions\n\n");
        output.push_str("| Package | Specifier | Packages | Result |\n");
        output.push_str("|---------|-----------|----------|--------|\n");
        for promotion in promotions {
            let result = match &promotion.error {
                Some(error) => format!(
                    "{}: {}",
                    promotion.state,
                    Self::escape_markdown_table_cell(error)
                ),
                None => promotion.state.to_string(),
            };
            output.push_str(&format!(
                "| {} | `{}` | {} | {} |\n",
                Self::package_link(&promotion.name),
                Self::escape_markdown_table_cell(&promotion.version),
                Self::consumer_list(&promotion.consumers),
                result
            ));
        }
        output.push('\n');
    }

    fn render_recommendations(&self, output: &mut String, recommendations: &[RecommendationView]) {
        output.push_str("## Catalog Recommendations\n\n");
        output.push_str(
            "Dependencies declared with the same range by several packages. Move them into the catalog with `pnpm-catalog promote <name>`.\n\n",
        );
        if recommendations.is_empty() {
            output.push_str("*No recommendations*\n\n");
            return;
        }

        output.push_str("| Package | Specifier | Declared by |\n");
        output.push_str("|---------|-----------|-------------|\n");
        for rec in recommendations {
            output.push_str(&format!(
                "| {} | `{}` | {} |\n",
                Self::package_link(&rec.name),
                Self::escape_markdown_table_cell(&rec.specifier),
                Self::consumer_list(&rec.consumers)
            ));
        }
        output.push('\n');
    }

    fn render_manifest_duplicates(&self, output: &mut String, duplicates: &[ManifestDuplicateView]) {
        output.push_str("## Conflicting Ranges\n\n");
        output.push_str("Dependencies declared with more than one range across member packages.\n\n");
        if duplicates.is_empty() {
            output.push_str("*No conflicting ranges*\n\n");
            return;
        }

        output.push_str("| Package | Ranges | Installed twice |\n");
        output.push_str("|---------|--------|-----------------|\n");
        for dup in duplicates {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::package_link(&dup.name),
                Self::specifier_lines(&dup.specifiers),
                if dup.also_in_live_graph { "yes" } else { "no" }
            ));
        }
        output.push('\n');
    }

    fn render_live_duplicates(&self, output: &mut String, duplicates: &[LiveDuplicateView]) {
        output.push_str("## Duplicate Installs\n\n");
        output.push_str("Packages resolved to more than one version in pnpm-lock.yaml.\n\n");
        if duplicates.is_empty() {
            output.push_str("*No duplicate installs*\n\n");
            return;
        }

        output.push_str("| Package | Versions | Required by |\n");
        output.push_str("|---------|----------|-------------|\n");
        for dup in duplicates {
            for (index, version) in dup.versions.iter().enumerate() {
                let name = if index == 0 {
                    Self::package_link(&dup.name)
                } else {
                    String::new()
                };
                let required_by = if version.from_dependencies.is_empty() {
                    "-".to_string()
                } else {
                    Self::consumer_list(&version.from_dependencies)
                };
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    name,
                    Self::escape_markdown_table_cell(&version.version),
                    required_by
                ));
            }
        }
        output.push('\n');
    }

    fn render_catalog(&self, output: &mut String, catalog: &IndexMap<String, String>) {
        output.push_str("## Catalog\n\n");
        if catalog.is_empty() {
            output.push_str("*The default catalog is empty*\n\n");
            return;
        }

        output.push_str("| Package | Specifier |\n");
        output.push_str("|---------|-----------|\n");
        for (name, specifier) in catalog {
            output.push_str(&format!(
                "| {} | `{}` |\n",
                Self::package_link(name),
                Self::escape_markdown_table_cell(specifier)
            ));
        }
        output.push('\n');
    }

    fn render_declared(&self, output: &mut String, declared: &[DeclaredDependencyView]) {
        output.push_str("## Declared Dependencies\n\n");
        if declared.is_empty() {
            output.push_str("*No dependencies declared*\n");
            return;
        }

        output.push_str("| Package | Ranges |\n");
        output.push_str("|---------|--------|\n");
        for dep in declared {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::package_link(&dep.name),
                Self::specifier_lines(&dep.specifiers)
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &WorkspaceReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        if !report.promotions.is_empty() {
            self.render_promotions(&mut output, &report.promotions);
        }
        self.render_recommendations(&mut output, &report.recommendations);
        self.render_manifest_duplicates(&mut output, &report.manifest_duplicates);
        self.render_live_duplicates(&mut output, &report.live_duplicates);
        self.render_catalog(&mut output, &report.catalog);
        self.render_declared(&mut output, &report.declared_dependencies);

        Ok(output)
    }
}
