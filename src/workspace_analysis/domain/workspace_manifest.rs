use super::null_as_default;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Decoded `pnpm-workspace.yaml`
///
/// `packages` and the default `catalog` are typed; every other top-level key
/// (`catalogs`, `onlyBuiltDependencies`, ...) is carried through untouched so
/// a rewrite does not drop settings this tool does not understand. Comments
/// and formatting of the original file are not preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub catalog: IndexMap<String, String>,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_yaml_ng::Value>,
}

impl WorkspaceManifest {
    pub fn parse(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str::<Option<Self>>(content)?.unwrap_or_default())
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// Sets `catalog[name] = version`, returning the previous binding.
    /// Last write wins.
    pub fn set_catalog_entry(&mut self, name: &str, version: &str) -> Option<String> {
        self.catalog.insert(name.to_string(), version.to_string())
    }
}
