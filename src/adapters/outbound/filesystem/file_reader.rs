use crate::ports::outbound::{
    LockfileReader, MemberManifestReader, LOCKFILE_NAME, MEMBER_MANIFEST_NAME,
};
use crate::shared::error::CatalogError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading workspace files from the file system
///
/// This adapter implements both LockfileReader and MemberManifestReader ports.
/// Every read goes through the symlink, file-type and size checks.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, workspace_root: &Path) -> Result<String> {
        let lockfile_path = workspace_root.join(LOCKFILE_NAME);

        if !lockfile_path.exists() {
            return Err(CatalogError::LockfileNotFound {
                path: lockfile_path,
            }
            .into());
        }

        read_checked(&lockfile_path, LOCKFILE_NAME).map_err(|e| {
            CatalogError::FileReadError {
                path: lockfile_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl MemberManifestReader for FileSystemReader {
    fn list_children(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| CatalogError::FileReadError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        // An unreadable entry drops only that entry; file_type() does not
        // follow symlinks
        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .map(|entry| entry.path())
            .collect();
        children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(children)
    }

    fn read_member_manifest(&self, member_dir: &Path) -> Result<String> {
        let manifest_path = member_dir.join(MEMBER_MANIFEST_NAME);
        read_checked(&manifest_path, MEMBER_MANIFEST_NAME).map_err(|e| {
            CatalogError::FileReadError {
                path: manifest_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
