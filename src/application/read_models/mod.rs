//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

mod workspace_report;
mod workspace_report_builder;

pub use workspace_report::{
    DeclaredDependencyView, LiveDuplicateView, ManifestDuplicateView, RecommendationView,
    ReportMetadataView, ReportSummaryView, ResolvedVersionView, SpecifierView, WorkspaceReport,
};
pub use workspace_report_builder::{WorkspaceReportBuilder, TOOL_NAME, TOOL_VERSION};
