use super::promotion_guard::PromotionGuard;
use crate::application::dto::PromotionState;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use crate::workspace_analysis::domain::WorkspaceSnapshot;
use crate::workspace_analysis::services::IgnoreList;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// WorkspaceSession - the single owner of derived workspace state
///
/// Holds exactly one published [`WorkspaceSnapshot`] at a time. Loads
/// claim a generation number before reading from disk; a finished load is
/// only published when its generation is newer than the current one, so a
/// slow load cannot overwrite the result of a later one.
///
/// The session also carries the coordination primitives promotions need:
/// the per-name in-flight table, the mutex around the workspace-manifest
/// read-modify-write, and the mutex that keeps package-manager runs in one
/// workspace from overlapping.
pub struct WorkspaceSession {
    root: PathBuf,
    ignore_list: IgnoreList,
    current: RwLock<Option<Arc<WorkspaceSnapshot>>>,
    last_generation: AtomicU64,
    promotions: DashMap<String, PromotionState>,
    manifest_lock: Mutex<()>,
    install_lock: tokio::sync::Mutex<()>,
}

impl WorkspaceSession {
    pub fn new(root: PathBuf, ignore_list: IgnoreList) -> Self {
        Self {
            root,
            ignore_list,
            current: RwLock::new(None),
            last_generation: AtomicU64::new(0),
            promotions: DashMap::new(),
            manifest_lock: Mutex::new(()),
            install_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore_list
    }

    /// Claims the generation number for a load that is about to start
    pub fn next_generation(&self) -> u64 {
        self.last_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The currently published snapshot, if any load has succeeded
    pub fn snapshot(&self) -> Option<Arc<WorkspaceSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Like [`WorkspaceSession::snapshot`], but an error before the first load
    pub fn require_snapshot(&self) -> Result<Arc<WorkspaceSnapshot>> {
        self.snapshot()
            .ok_or_else(|| CatalogError::WorkspaceNotLoaded.into())
    }

    /// Publishes `snapshot` unless a newer generation is already visible.
    ///
    /// Returns whether the snapshot was published.
    pub fn publish(&self, snapshot: WorkspaceSnapshot) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current
            .as_ref()
            .is_some_and(|existing| existing.generation >= snapshot.generation)
        {
            return false;
        }
        *current = Some(Arc::new(snapshot));
        true
    }

    /// Marks `name` as in flight.
    ///
    /// # Errors
    /// Returns `PromotionInFlight` when a promotion of the same name has not
    /// finished yet
    pub fn begin_promotion(&self, name: &str) -> Result<PromotionGuard<'_>> {
        match self.promotions.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                if *entry.get() == PromotionState::InFlight {
                    return Err(CatalogError::PromotionInFlight {
                        name: name.to_string(),
                    }
                    .into());
                }
                entry.insert(PromotionState::InFlight);
            }
            Entry::Vacant(entry) => {
                entry.insert(PromotionState::InFlight);
            }
        }
        Ok(PromotionGuard::new(&self.promotions, name.to_string()))
    }

    /// Last known state of the promotion for `name`
    pub fn promotion_state(&self, name: &str) -> PromotionState {
        self.promotions
            .get(name)
            .map(|state| *state)
            .unwrap_or_default()
    }

    /// Serializes workspace-manifest read-modify-write cycles.
    ///
    /// Never hold the returned guard across an `.await`.
    pub fn lock_manifest(&self) -> MutexGuard<'_, ()> {
        self.manifest_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Serializes package-manager runs in this workspace
    pub async fn lock_install(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.install_lock.lock().await
    }
}
