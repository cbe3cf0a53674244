//! Workspace report read model
//!
//! A denormalized, serialization-ready view of one [`WorkspaceSnapshot`]
//! plus the outcome of any promotions that ran before it was taken.
//!
//! [`WorkspaceSnapshot`]: crate::workspace_analysis::domain::WorkspaceSnapshot

use crate::application::dto::PromotionOutcome;
use indexmap::IndexMap;
use serde::Serialize;

/// Main read model rendered by the report formatters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceReport {
    pub metadata: ReportMetadataView,
    pub summary: ReportSummaryView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub promotions: Vec<PromotionOutcome>,
    pub live_duplicates: Vec<LiveDuplicateView>,
    pub manifest_duplicates: Vec<ManifestDuplicateView>,
    pub recommendations: Vec<RecommendationView>,
    pub catalog: IndexMap<String, String>,
    pub declared_dependencies: Vec<DeclaredDependencyView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339
    pub timestamp: String,
    pub workspace_root: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryView {
    pub member_count: usize,
    pub declared_dependency_count: usize,
    pub resolved_package_count: usize,
    pub live_duplicate_count: usize,
    pub manifest_duplicate_count: usize,
    pub recommendation_count: usize,
}

/// One specifier of a declared dependency and who declares it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecifierView {
    pub specifier: String,
    pub consumers: Vec<String>,
}

/// One resolved version and the snapshot keys that required it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVersionView {
    pub version: String,
    pub from_dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveDuplicateView {
    pub name: String,
    pub versions: Vec<ResolvedVersionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDuplicateView {
    pub name: String,
    pub specifiers: Vec<SpecifierView>,
    pub also_in_live_graph: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub name: String,
    pub specifier: String,
    pub consumers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredDependencyView {
    pub name: String,
    pub specifiers: Vec<SpecifierView>,
}

impl WorkspaceReport {
    /// Whether a `--check` run should fail
    pub fn has_issues(&self) -> bool {
        self.summary.manifest_duplicate_count > 0 || self.summary.recommendation_count > 0
    }

    /// Whether any promotion in this report failed
    pub fn has_failed_promotions(&self) -> bool {
        self.promotions.iter().any(|p| !p.succeeded())
    }
}
