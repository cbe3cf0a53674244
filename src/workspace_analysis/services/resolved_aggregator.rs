use crate::workspace_analysis::domain::{
    split_package_key, strip_peer_suffix, PnpmLockfile, ResolvedAggregate,
};

/// ResolvedAggregator - builds the resolved-version view of the lockfile
///
/// Phase one registers every `packages` key under its name. Phase two walks
/// the snapshot edges and records, per `(dependency, logical version)`, which
/// resolved instances pulled it in. Edges to names phase one never saw are
/// kept as new entries so stale lockfile residue stays visible.
pub struct ResolvedAggregator;

impl ResolvedAggregator {
    pub fn aggregate(lockfile: &PnpmLockfile) -> ResolvedAggregate {
        let mut result = ResolvedAggregate::new();

        for key in lockfile.package_keys() {
            let Some((name, version)) = split_package_key(key) else {
                continue;
            };
            result
                .entry(name.to_string())
                .or_default()
                .register_version(version);
        }

        for (snapshot_key, snapshot) in &lockfile.snapshots {
            for (dep_name, dep_version) in &snapshot.dependencies {
                result
                    .entry(dep_name.clone())
                    .or_default()
                    .add_provenance(strip_peer_suffix(dep_version), snapshot_key);
            }
        }

        result
    }
}
