use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File name of a member package manifest
pub const MEMBER_MANIFEST_NAME: &str = "package.json";

/// MemberManifestReader port for enumerating and reading member packages
pub trait MemberManifestReader {
    /// Lists the immediate child directories of `dir`, sorted by file name
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed
    fn list_children(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Reads `<member_dir>/package.json`
    ///
    /// # Errors
    /// Returns an error if the manifest is missing or unreadable
    fn read_member_manifest(&self, member_dir: &Path) -> Result<String>;
}
