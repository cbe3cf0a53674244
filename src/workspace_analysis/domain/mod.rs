pub mod aggregate;
pub mod lockfile;
pub mod member_package;
pub mod snapshot;
pub mod workspace_manifest;

pub use aggregate::{
    DeclaredAggregate, DeclaredDependency, LiveDuplicate, ManifestDuplicate, ResolvedAggregate,
    ResolvedDependency, ResolvedVersion, VersionBuckets,
};
pub use lockfile::{split_package_key, strip_peer_suffix, LockSnapshot, PnpmLockfile};
pub use member_package::{DependencyMap, MemberPackage, PackageManifest};
pub use snapshot::WorkspaceSnapshot;
pub use workspace_manifest::WorkspaceManifest;

use serde::{Deserialize, Deserializer};

/// Treats an explicit YAML/JSON `null` the same as an absent field.
///
/// pnpm writes `{}` for empty tables, but hand-edited files often leave a
/// bare `catalog:` or `dependencies:` key behind.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
