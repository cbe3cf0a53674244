use pnpm_catalog::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock LockfileReader for testing
///
/// Clones share the content, so a test can change the lockfile between loads.
/// `None` content behaves like a missing file.
#[derive(Clone, Default)]
pub struct MockLockfileReader {
    content: Arc<Mutex<Option<String>>>,
}

impl MockLockfileReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Arc::new(Mutex::new(Some(content.to_string()))),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn set_content(&self, content: Option<&str>) {
        *self.content.lock().unwrap() = content.map(str::to_string);
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, workspace_root: &Path) -> Result<String> {
        self.content.lock().unwrap().clone().ok_or_else(|| {
            CatalogError::LockfileNotFound {
                path: workspace_root.join("pnpm-lock.yaml"),
            }
            .into()
        })
    }
}
