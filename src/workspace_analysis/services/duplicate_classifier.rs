use super::IgnoreList;
use crate::workspace_analysis::domain::{
    DeclaredAggregate, LiveDuplicate, ManifestDuplicate, ResolvedAggregate, VersionBuckets,
};

/// DuplicateClassifier - finds names with more than one version key
///
/// The live-graph list comes from the lockfile and means divergent installs
/// actually happened. The manifest list comes from the declared aggregate and
/// skips names on the ignore list.
pub struct DuplicateClassifier<'a> {
    ignore_list: &'a IgnoreList,
}

impl<'a> DuplicateClassifier<'a> {
    pub fn new(ignore_list: &'a IgnoreList) -> Self {
        Self { ignore_list }
    }

    /// Names with more than one resolved version, in aggregate order
    pub fn live_duplicates(resolved: &ResolvedAggregate) -> Vec<LiveDuplicate> {
        resolved
            .iter()
            .filter(|(_, dep)| dep.has_multiple_versions())
            .map(|(name, dep)| LiveDuplicate {
                name: name.clone(),
                versions: dep.versions.clone(),
            })
            .collect()
    }

    /// Names declared with more than one specifier, minus ignored names.
    ///
    /// Each entry records whether the same name is also a live-graph
    /// duplicate in `resolved`.
    pub fn manifest_duplicates(
        &self,
        declared: &DeclaredAggregate,
        resolved: &ResolvedAggregate,
    ) -> Vec<ManifestDuplicate> {
        declared
            .iter()
            .filter(|(_, dep)| dep.has_multiple_versions())
            .filter(|(name, _)| !self.ignore_list.is_ignored(name))
            .map(|(name, dep)| ManifestDuplicate {
                name: name.clone(),
                versions: dep.versions.clone(),
                also_in_live_graph: resolved
                    .get(name)
                    .is_some_and(|r| r.has_multiple_versions()),
            })
            .collect()
    }
}
