use pnpm_catalog::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory member directories and their `package.json` files
///
/// Directories are kept in a BTreeMap, so children come back sorted like
/// the real reader returns them.
#[derive(Clone, Default)]
pub struct MockMemberManifestReader {
    manifests: Arc<Mutex<BTreeMap<PathBuf, Option<String>>>>,
}

impl MockMemberManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `<root>/<relative>` with the given `package.json`
    pub fn with_member(self, root: &Path, relative: &str, package_json: &str) -> Self {
        self.set_manifest(root, relative, package_json);
        self
    }

    /// Registers a directory that has no `package.json`
    pub fn with_empty_dir(self, root: &Path, relative: &str) -> Self {
        self.manifests
            .lock()
            .unwrap()
            .insert(root.join(relative), None);
        self
    }

    pub fn set_manifest(&self, root: &Path, relative: &str, package_json: &str) {
        self.manifests
            .lock()
            .unwrap()
            .insert(root.join(relative), Some(package_json.to_string()));
    }
}

impl MemberManifestReader for MockMemberManifestReader {
    fn list_children(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let children: Vec<PathBuf> = self
            .manifests
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect();
        if children.is_empty() {
            anyhow::bail!("Mock: no such directory {}", dir.display());
        }
        Ok(children)
    }

    fn read_member_manifest(&self, member_dir: &Path) -> Result<String> {
        self.manifests
            .lock()
            .unwrap()
            .get(member_dir)
            .cloned()
            .flatten()
            .ok_or_else(|| anyhow::anyhow!("Mock: no package.json in {}", member_dir.display()))
    }
}
