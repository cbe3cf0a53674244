use crate::shared::error::CatalogError;
use crate::shared::Result;
use crate::workspace_analysis::domain::PnpmLockfile;
use std::path::Path;

/// File name of the pnpm lockfile in the workspace root
pub const LOCKFILE_NAME: &str = "pnpm-lock.yaml";

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to read
/// `pnpm-lock.yaml` from the workspace root.
pub trait LockfileReader {
    /// Reads the raw lockfile from the workspace root
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lockfile does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, workspace_root: &Path) -> Result<String>;

    /// Reads and decodes the lockfile
    ///
    /// Missing `packages` or `snapshots` tables decode as empty; only
    /// malformed YAML is an error.
    fn read_and_parse_lockfile(&self, workspace_root: &Path) -> Result<PnpmLockfile> {
        let content = self.read_lockfile(workspace_root)?;
        PnpmLockfile::parse(&content).map_err(|e| {
            CatalogError::LockfileParseError {
                path: workspace_root.join(LOCKFILE_NAME),
                details: e.to_string(),
            }
            .into()
        })
    }
}
