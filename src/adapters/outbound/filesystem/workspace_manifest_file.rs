use crate::ports::outbound::{WorkspaceManifestStore, WORKSPACE_MANIFEST_NAME};
use crate::shared::error::CatalogError;
use crate::shared::security::{read_checked, validate_not_symlink};
use crate::shared::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// WorkspaceManifestFile adapter for `pnpm-workspace.yaml` on disk
///
/// Writes go to a temporary file in the workspace root which is then
/// renamed over the manifest, so readers never observe a half-written file.
pub struct WorkspaceManifestFile;

impl WorkspaceManifestFile {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WorkspaceManifestFile {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceManifestStore for WorkspaceManifestFile {
    fn read_workspace_manifest(&self, workspace_root: &Path) -> Result<String> {
        let manifest_path = workspace_root.join(WORKSPACE_MANIFEST_NAME);

        if !manifest_path.exists() {
            return Err(CatalogError::WorkspaceManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "No {} in \"{}\".\n   \
                     Run in the root of a pnpm workspace, or specify it with the --path option.",
                    WORKSPACE_MANIFEST_NAME,
                    workspace_root.display()
                ),
            }
            .into());
        }

        read_checked(&manifest_path, WORKSPACE_MANIFEST_NAME).map_err(|e| {
            CatalogError::FileReadError {
                path: manifest_path,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn write_workspace_manifest(&self, workspace_root: &Path, content: &str) -> Result<()> {
        let manifest_path = workspace_root.join(WORKSPACE_MANIFEST_NAME);

        if manifest_path.exists() {
            validate_not_symlink(&manifest_path, "write").map_err(|e| {
                CatalogError::SecurityError {
                    path: manifest_path.clone(),
                    reason: e.to_string(),
                    hint: "Replace the symlink with a regular pnpm-workspace.yaml".to_string(),
                }
            })?;
        }

        let write_error = |details: String| CatalogError::FileWriteError {
            path: manifest_path.clone(),
            details,
        };

        let mut temp = NamedTempFile::new_in(workspace_root).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(&manifest_path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}
