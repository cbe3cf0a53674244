use crate::shared::error::CatalogError;
use crate::shared::Result;
use crate::workspace_analysis::domain::WorkspaceManifest;
use std::path::Path;

/// File name of the workspace manifest in the workspace root
pub const WORKSPACE_MANIFEST_NAME: &str = "pnpm-workspace.yaml";

/// WorkspaceManifestStore port for reading and rewriting `pnpm-workspace.yaml`
///
/// Writes always replace the whole file. Callers are responsible for
/// serializing read-modify-write cycles.
pub trait WorkspaceManifestStore {
    /// Reads the raw workspace manifest
    ///
    /// # Errors
    /// Returns `WorkspaceManifestNotFound` when the file is missing, or an
    /// I/O error when it cannot be read
    fn read_workspace_manifest(&self, workspace_root: &Path) -> Result<String>;

    /// Replaces the workspace manifest with `content`
    fn write_workspace_manifest(&self, workspace_root: &Path, content: &str) -> Result<()>;

    /// Reads and decodes the workspace manifest
    fn load_workspace_manifest(&self, workspace_root: &Path) -> Result<WorkspaceManifest> {
        let content = self.read_workspace_manifest(workspace_root)?;
        WorkspaceManifest::parse(&content).map_err(|e| {
            CatalogError::WorkspaceManifestParseError {
                path: workspace_root.join(WORKSPACE_MANIFEST_NAME),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Serializes and writes the whole manifest back
    fn save_workspace_manifest(
        &self,
        workspace_root: &Path,
        manifest: &WorkspaceManifest,
    ) -> Result<()> {
        let content = manifest.to_yaml().map_err(|e| CatalogError::FileWriteError {
            path: workspace_root.join(WORKSPACE_MANIFEST_NAME),
            details: format!("Failed to serialize workspace manifest: {}", e),
        })?;
        self.write_workspace_manifest(workspace_root, &content)
    }
}
