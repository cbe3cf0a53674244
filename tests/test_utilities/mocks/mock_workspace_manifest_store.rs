use pnpm_catalog::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// In-memory `pnpm-workspace.yaml` shared between clones
#[derive(Clone, Default)]
pub struct MockWorkspaceManifestStore {
    content: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
    fail_writes: bool,
}

impl MockWorkspaceManifestStore {
    pub fn new(content: &str) -> Self {
        Self {
            content: Arc::new(Mutex::new(Some(content.to_string()))),
            ..Default::default()
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    /// Reads succeed, every write fails
    pub fn with_write_failure(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    /// The manifest as currently stored
    pub fn manifest(&self) -> WorkspaceManifest {
        WorkspaceManifest::parse(&self.content().unwrap_or_default()).unwrap()
    }
}

impl WorkspaceManifestStore for MockWorkspaceManifestStore {
    fn read_workspace_manifest(&self, workspace_root: &Path) -> Result<String> {
        self.content().ok_or_else(|| {
            CatalogError::WorkspaceManifestNotFound {
                path: workspace_root.join("pnpm-workspace.yaml"),
                suggestion: "mock workspace has no manifest".to_string(),
            }
            .into()
        })
    }

    fn write_workspace_manifest(&self, workspace_root: &Path, content: &str) -> Result<()> {
        if self.fail_writes {
            return Err(CatalogError::FileWriteError {
                path: workspace_root.join("pnpm-workspace.yaml"),
                details: "Mock write failure".to_string(),
            }
            .into());
        }
        *self.content.lock().unwrap() = Some(content.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
