use super::null_as_default;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dependency name to version specifier, in declaration order.
///
/// Specifiers are opaque: semver ranges, `catalog:` and `workspace:` tokens
/// are all kept verbatim and only ever compared as strings.
pub type DependencyMap = IndexMap<String, String>;

/// Decoded `package.json` of a workspace member
///
/// Only the fields the analysis needs are decoded; everything else in the
/// manifest is ignored. Missing or `null` dependency tables decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: DependencyMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dev_dependencies: DependencyMap,
}

impl PackageManifest {
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

/// MemberPackage - one workspace member as seen during a single load cycle
///
/// Immutable once built; a reload produces a fresh list instead of patching
/// existing members.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPackage {
    path: PathBuf,
    name: String,
    /// False when `name` is the directory-name fallback
    #[serde(skip)]
    has_manifest_name: bool,
    dependencies: DependencyMap,
    dev_dependencies: DependencyMap,
}

impl MemberPackage {
    pub fn new(
        path: PathBuf,
        name: String,
        dependencies: DependencyMap,
        dev_dependencies: DependencyMap,
    ) -> Self {
        Self {
            path,
            name,
            has_manifest_name: true,
            dependencies,
            dev_dependencies,
        }
    }

    /// Builds a member from its decoded manifest.
    ///
    /// A manifest without a `name` falls back to the directory name.
    pub fn from_manifest(path: PathBuf, manifest: PackageManifest) -> Self {
        match manifest.name.filter(|n| !n.trim().is_empty()) {
            Some(name) => Self::new(path, name, manifest.dependencies, manifest.dev_dependencies),
            None => Self {
                name: directory_name(&path),
                has_manifest_name: false,
                ..Self::new(path, String::new(), manifest.dependencies, manifest.dev_dependencies)
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// pnpm `--filter` selector for this member
    ///
    /// pnpm matches bare selectors against `package.json` names, so a member
    /// without one is selected by its directory (`./packages/web`).
    pub fn filter_selector(&self) -> String {
        if self.has_manifest_name {
            return self.name.clone();
        }
        let path = self.path.to_string_lossy().replace('\\', "/");
        if self.path.is_absolute() || path.starts_with("./") {
            path
        } else {
            format!("./{}", path)
        }
    }

    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &DependencyMap {
        &self.dev_dependencies
    }

    /// All `(name, specifier)` pairs: `dependencies` first, then `devDependencies`.
    pub fn declared(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dependencies
            .iter()
            .chain(self.dev_dependencies.iter())
            .map(|(name, spec)| (name.as_str(), spec.as_str()))
    }
}

fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
