use indexmap::IndexMap;
use serde::Serialize;

/// Anything grouped by distinct version key
pub trait VersionBuckets {
    fn version_count(&self) -> usize;

    /// More than one distinct version key means the name is duplicated
    fn has_multiple_versions(&self) -> bool {
        self.version_count() > 1
    }
}

/// One dependency name as declared across member manifests:
/// specifier to consuming member names, in first-seen order.
///
/// A member declaring the same specifier in both `dependencies` and
/// `devDependencies` appears twice in the consumer list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeclaredDependency {
    pub versions: IndexMap<String, Vec<String>>,
}

impl DeclaredDependency {
    pub fn add_consumer(&mut self, specifier: &str, consumer: &str) {
        self.versions
            .entry(specifier.to_string())
            .or_default()
            .push(consumer.to_string());
    }

    /// The specifier and consumers when exactly one specifier is declared
    pub fn sole_version(&self) -> Option<(&str, &[String])> {
        if self.versions.len() != 1 {
            return None;
        }
        self.versions
            .first()
            .map(|(spec, consumers)| (spec.as_str(), consumers.as_slice()))
    }
}

impl VersionBuckets for DeclaredDependency {
    fn version_count(&self) -> usize {
        self.versions.len()
    }
}

/// Provenance of one resolved version: the snapshot keys that required it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVersion {
    pub from_dependencies: Vec<String>,
}

/// One dependency name as resolved in the lockfile
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedDependency {
    pub versions: IndexMap<String, ResolvedVersion>,
}

impl ResolvedDependency {
    /// Registers a version without provenance if it is not known yet
    pub fn register_version(&mut self, version: &str) {
        self.versions.entry(version.to_string()).or_default();
    }

    pub fn add_provenance(&mut self, version: &str, snapshot_key: &str) {
        self.versions
            .entry(version.to_string())
            .or_default()
            .from_dependencies
            .push(snapshot_key.to_string());
    }
}

impl VersionBuckets for ResolvedDependency {
    fn version_count(&self) -> usize {
        self.versions.len()
    }
}

/// Dependency name to its declared specifiers, in encounter order
pub type DeclaredAggregate = IndexMap<String, DeclaredDependency>;

/// Dependency name to its resolved versions, in encounter order
pub type ResolvedAggregate = IndexMap<String, ResolvedDependency>;

/// A name with more than one resolved version in the live dependency graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveDuplicate {
    pub name: String,
    pub versions: IndexMap<String, ResolvedVersion>,
}

/// A name declared with more than one specifier across member manifests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDuplicate {
    pub name: String,
    pub versions: IndexMap<String, Vec<String>>,
    /// Whether the divergence also produced divergent installs
    pub also_in_live_graph: bool,
}
