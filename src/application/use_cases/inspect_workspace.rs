use crate::application::session::WorkspaceSession;
use crate::ports::outbound::{
    LockfileReader, MemberManifestReader, ProgressReporter, WorkspaceManifestStore,
};
use crate::shared::Result;
use crate::workspace_analysis::domain::{MemberPackage, PackageManifest, WorkspaceSnapshot};
use crate::workspace_analysis::services::{
    IgnoreList, MemberDiscovery, MemberPattern, SnapshotBuilder, SnapshotInputs,
    DEFAULT_IGNORED_PACKAGES,
};
use std::path::Path;
use std::sync::Arc;

/// InspectWorkspaceUseCase - the reload pipeline
///
/// Reads `pnpm-workspace.yaml`, every member `package.json` and
/// `pnpm-lock.yaml`, derives a full snapshot and publishes it to the
/// session. A failed load leaves the previously published snapshot in place.
///
/// # Type Parameters
/// * `WMS` - WorkspaceManifestStore implementation
/// * `LR` - LockfileReader implementation
/// * `MMR` - MemberManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct InspectWorkspaceUseCase<WMS, LR, MMR, PR> {
    manifest_store: WMS,
    lockfile_reader: LR,
    member_reader: MMR,
    progress_reporter: PR,
}

impl<WMS, LR, MMR, PR> InspectWorkspaceUseCase<WMS, LR, MMR, PR>
where
    WMS: WorkspaceManifestStore,
    LR: LockfileReader,
    MMR: MemberManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new InspectWorkspaceUseCase with injected dependencies
    pub fn new(
        manifest_store: WMS,
        lockfile_reader: LR,
        member_reader: MMR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_store,
            lockfile_reader,
            member_reader,
            progress_reporter,
        }
    }

    pub fn manifest_store(&self) -> &WMS {
        &self.manifest_store
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Runs the full pipeline from disk
    ///
    /// # Returns
    /// The snapshot visible after this load. When a newer load finished
    /// first, that newer snapshot is returned and this result is discarded.
    pub fn execute(&self, session: &WorkspaceSession) -> Result<Arc<WorkspaceSnapshot>> {
        let generation = session.next_generation();
        let root = session.root();

        // Step 1: workspace manifest (packages + catalog)
        self.progress_reporter.report(&format!(
            "📖 Loading pnpm-workspace.yaml from: {}",
            root.display()
        ));
        let manifest = self.manifest_store.load_workspace_manifest(root)?;

        // Step 2: member manifests
        let members = self.read_members(root, &manifest.packages);
        self.progress_reporter
            .report(&format!("✅ Found {} member package(s)", members.len()));

        // Step 3: lockfile
        let lockfile = self.lockfile_reader.read_and_parse_lockfile(root)?;
        self.progress_reporter.report(&format!(
            "✅ Lockfile lists {} package(s)",
            lockfile.packages.len()
        ));

        // Step 4: derive everything in one pass
        let snapshot = SnapshotBuilder::build(
            SnapshotInputs {
                root: root.to_path_buf(),
                members,
                lockfile,
                catalog: manifest.catalog,
            },
            session.ignore_list(),
            generation,
        );
        self.warn_unmatched_ignores(session.ignore_list(), &snapshot);

        if !session.publish(snapshot) {
            self.progress_reporter.report(&format!(
                "ℹ️  Load #{} finished after a newer one; keeping the newer result",
                generation
            ));
        }

        session.require_snapshot()
    }

    /// Reads members pattern by pattern, in pattern order.
    ///
    /// Unreadable directories and manifests are skipped; they never fail
    /// the whole load.
    fn read_members(&self, root: &Path, patterns: &[String]) -> Vec<MemberPackage> {
        let mut members = Vec::new();

        for pattern in MemberDiscovery::plan(root, patterns) {
            match pattern {
                MemberPattern::Children(base) => match self.member_reader.list_children(&base) {
                    Ok(children) => members.extend(
                        children
                            .iter()
                            .filter_map(|dir| self.read_member(root, dir)),
                    ),
                    Err(e) => self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping pattern for {}: {}",
                        base.display(),
                        e
                    )),
                },
                MemberPattern::Single(dir) => members.extend(self.read_member(root, &dir)),
                MemberPattern::Exclude(_) => {}
            }
        }

        members
    }

    fn read_member(&self, root: &Path, dir: &Path) -> Option<MemberPackage> {
        // Directories without a package.json are not members
        let content = self.member_reader.read_member_manifest(dir).ok()?;

        match PackageManifest::parse(&content) {
            Ok(manifest) => {
                let relative = dir.strip_prefix(root).unwrap_or(dir).to_path_buf();
                Some(MemberPackage::from_manifest(relative, manifest))
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Skipping {}: invalid package.json ({})",
                    dir.display(),
                    e
                ));
                None
            }
        }
    }

    /// Warns about user-supplied ignore patterns that match no declared name
    fn warn_unmatched_ignores(&self, ignore_list: &IgnoreList, snapshot: &WorkspaceSnapshot) {
        let declared_names = snapshot.declared.keys().map(String::as_str);
        for pattern in ignore_list.unmatched(declared_names) {
            if DEFAULT_IGNORED_PACKAGES.contains(&pattern.as_str()) {
                continue;
            }
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Ignore pattern '{}' did not match any dependencies.",
                pattern
            ));
        }
    }
}
