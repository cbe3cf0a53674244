use super::{
    CatalogRecommender, DeclaredAggregator, DuplicateClassifier, IgnoreList, ResolvedAggregator,
};
use crate::workspace_analysis::domain::{MemberPackage, PnpmLockfile, WorkspaceSnapshot};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Source-of-truth inputs of one load cycle
#[derive(Debug, Clone, Default)]
pub struct SnapshotInputs {
    pub root: PathBuf,
    pub members: Vec<MemberPackage>,
    pub lockfile: PnpmLockfile,
    pub catalog: IndexMap<String, String>,
}

/// SnapshotBuilder - runs the whole derivation chain in one pass
///
/// members -> declared aggregate -> manifest duplicates + recommendations,
/// lockfile -> resolved aggregate -> live duplicates. Always recomputes
/// everything; there is no incremental path.
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    pub fn build(inputs: SnapshotInputs, ignore_list: &IgnoreList, generation: u64) -> WorkspaceSnapshot {
        let declared = DeclaredAggregator::aggregate(&inputs.members);
        let resolved = ResolvedAggregator::aggregate(&inputs.lockfile);

        let live_duplicates = DuplicateClassifier::live_duplicates(&resolved);
        let manifest_duplicates =
            DuplicateClassifier::new(ignore_list).manifest_duplicates(&declared, &resolved);
        let recommendations = CatalogRecommender::recommend(&declared);

        WorkspaceSnapshot {
            generation,
            root: inputs.root,
            members: inputs.members,
            catalog: inputs.catalog,
            declared,
            resolved,
            live_duplicates,
            manifest_duplicates,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace_analysis::domain::PackageManifest;

    fn member(json: &str) -> MemberPackage {
        let manifest = PackageManifest::parse(json).unwrap();
        let name = manifest.name.clone().unwrap();
        MemberPackage::from_manifest(PathBuf::from(format!("packages/{}", name)), manifest)
    }

    #[test]
    fn test_build_derives_every_view() {
        let inputs = SnapshotInputs {
            root: PathBuf::from("/repo"),
            members: vec![
                member(r#"{"name":"p1","dependencies":{"lodash":"^4.0.0","react":"^18.0.0"}}"#),
                member(r#"{"name":"p2","dependencies":{"lodash":"^4.0.0","react":"^17.0.0"}}"#),
            ],
            lockfile: PnpmLockfile::parse(
                r#"
packages:
  lodash@4.17.21: {}
  react@18.2.0: {}
  react@17.0.2: {}
"#,
            )
            .unwrap(),
            catalog: IndexMap::new(),
        };

        let snapshot = SnapshotBuilder::build(inputs, &IgnoreList::builtin(), 7);

        assert_eq!(snapshot.generation, 7);
        assert_eq!(snapshot.recommendations, vec!["lodash"]);
        assert_eq!(snapshot.manifest_duplicates.len(), 1);
        assert_eq!(snapshot.manifest_duplicates[0].name, "react");
        assert!(snapshot.manifest_duplicates[0].also_in_live_graph);
        assert_eq!(snapshot.live_duplicates.len(), 1);
        assert_eq!(snapshot.live_duplicates[0].name, "react");
        assert!(snapshot.is_recommended("lodash"));
        assert!(!snapshot.is_recommended("react"));
        assert!(snapshot.has_actionable_issues());
    }

    #[test]
    fn test_build_empty_workspace() {
        let snapshot = SnapshotBuilder::build(SnapshotInputs::default(), &IgnoreList::empty(), 1);
        assert!(snapshot.declared.is_empty());
        assert!(snapshot.resolved.is_empty());
        assert!(!snapshot.has_actionable_issues());
    }
}
