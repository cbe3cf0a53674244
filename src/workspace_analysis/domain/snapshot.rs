use super::{
    DeclaredAggregate, LiveDuplicate, ManifestDuplicate, MemberPackage, ResolvedAggregate,
};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// WorkspaceSnapshot - one generation of derived workspace state
///
/// Every field is recomputed together from the member manifests, the
/// lockfile and the workspace catalog. A snapshot is never edited after it
/// is built; a reload replaces it as a whole.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub generation: u64,
    pub root: PathBuf,
    pub members: Vec<MemberPackage>,
    pub catalog: IndexMap<String, String>,
    pub declared: DeclaredAggregate,
    pub resolved: ResolvedAggregate,
    pub live_duplicates: Vec<LiveDuplicate>,
    pub manifest_duplicates: Vec<ManifestDuplicate>,
    pub recommendations: Vec<String>,
}

impl WorkspaceSnapshot {
    pub fn is_recommended(&self, name: &str) -> bool {
        self.recommendations.iter().any(|r| r == name)
    }

    /// Issues a `--check` run should fail on
    pub fn has_actionable_issues(&self) -> bool {
        !self.manifest_duplicates.is_empty() || !self.recommendations.is_empty()
    }
}
