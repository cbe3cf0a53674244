//! Builder for constructing WorkspaceReport from a snapshot

use super::workspace_report::{
    DeclaredDependencyView, LiveDuplicateView, ManifestDuplicateView, RecommendationView,
    ReportMetadataView, ReportSummaryView, ResolvedVersionView, SpecifierView, WorkspaceReport,
};
use crate::application::dto::PromotionOutcome;
use crate::workspace_analysis::domain::{ResolvedVersion, WorkspaceSnapshot};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Tool name written into report metadata
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version written into report metadata
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing WorkspaceReport from a WorkspaceSnapshot
pub struct WorkspaceReportBuilder;

impl WorkspaceReportBuilder {
    /// Builds a report stamped with the current time
    pub fn build(snapshot: &WorkspaceSnapshot, promotions: Vec<PromotionOutcome>) -> WorkspaceReport {
        Self::build_at(snapshot, promotions, Utc::now())
    }

    /// Builds a report with an explicit timestamp
    pub fn build_at(
        snapshot: &WorkspaceSnapshot,
        promotions: Vec<PromotionOutcome>,
        timestamp: DateTime<Utc>,
    ) -> WorkspaceReport {
        WorkspaceReport {
            metadata: ReportMetadataView {
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
                timestamp: timestamp.to_rfc3339(),
                workspace_root: snapshot.root.display().to_string(),
                generation: snapshot.generation,
            },
            summary: Self::build_summary(snapshot),
            promotions,
            live_duplicates: snapshot
                .live_duplicates
                .iter()
                .map(|dup| LiveDuplicateView {
                    name: dup.name.clone(),
                    versions: resolved_versions(&dup.versions),
                })
                .collect(),
            manifest_duplicates: snapshot
                .manifest_duplicates
                .iter()
                .map(|dup| ManifestDuplicateView {
                    name: dup.name.clone(),
                    specifiers: specifiers(&dup.versions),
                    also_in_live_graph: dup.also_in_live_graph,
                })
                .collect(),
            recommendations: Self::build_recommendations(snapshot),
            catalog: snapshot.catalog.clone(),
            declared_dependencies: snapshot
                .declared
                .iter()
                .map(|(name, dep)| DeclaredDependencyView {
                    name: name.clone(),
                    specifiers: specifiers(&dep.versions),
                })
                .collect(),
        }
    }

    fn build_summary(snapshot: &WorkspaceSnapshot) -> ReportSummaryView {
        ReportSummaryView {
            member_count: snapshot.members.len(),
            declared_dependency_count: snapshot.declared.len(),
            resolved_package_count: snapshot.resolved.len(),
            live_duplicate_count: snapshot.live_duplicates.len(),
            manifest_duplicate_count: snapshot.manifest_duplicates.len(),
            recommendation_count: snapshot.recommendations.len(),
        }
    }

    fn build_recommendations(snapshot: &WorkspaceSnapshot) -> Vec<RecommendationView> {
        snapshot
            .recommendations
            .iter()
            .filter_map(|name| {
                let (specifier, consumers) = snapshot.declared.get(name)?.sole_version()?;
                Some(RecommendationView {
                    name: name.clone(),
                    specifier: specifier.to_string(),
                    consumers: consumers.to_vec(),
                })
            })
            .collect()
    }
}

fn specifiers(versions: &IndexMap<String, Vec<String>>) -> Vec<SpecifierView> {
    versions
        .iter()
        .map(|(specifier, consumers)| SpecifierView {
            specifier: specifier.clone(),
            consumers: consumers.clone(),
        })
        .collect()
}

fn resolved_versions(versions: &IndexMap<String, ResolvedVersion>) -> Vec<ResolvedVersionView> {
    versions
        .iter()
        .map(|(version, provenance)| ResolvedVersionView {
            version: version.clone(),
            from_dependencies: provenance.from_dependencies.clone(),
        })
        .collect()
}
