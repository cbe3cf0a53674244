use super::InspectWorkspaceUseCase;
use crate::application::dto::{PromotionOutcome, PromotionRequest, PromotionState};
use crate::application::session::WorkspaceSession;
use crate::ports::outbound::{
    CommandInvocation, LockfileReader, MemberManifestReader, PackageManagerRunner,
    ProgressReporter, WorkspaceManifestStore,
};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use crate::workspace_analysis::domain::{MemberPackage, WorkspaceSnapshot};
use crate::workspace_analysis::services::CATALOG_REFERENCE;

/// Failure of one promotion step, remembering whether disk was touched
struct StepFailure {
    manifest_written: bool,
    error: anyhow::Error,
}

/// PromoteToCatalogUseCase - moves one recommended dependency into the catalog
///
/// Steps, each stopping the promotion on failure with no rollback:
/// 1. capture the specifier and consumers from the current snapshot
/// 2. set `catalog[name]` in `pnpm-workspace.yaml` (whole-file rewrite)
/// 3. run `pnpm add <name>@catalog: -D` once, filtered to every consumer
/// 4. reload the workspace
///
/// A failure after step 2 still triggers a reload so the published snapshot
/// matches what is on disk.
///
/// # Type Parameters
/// * `WMS`, `LR`, `MMR`, `PR` - see [`InspectWorkspaceUseCase`]
/// * `RUN` - PackageManagerRunner implementation
pub struct PromoteToCatalogUseCase<WMS, LR, MMR, PR, RUN> {
    inspector: InspectWorkspaceUseCase<WMS, LR, MMR, PR>,
    runner: RUN,
}

impl<WMS, LR, MMR, PR, RUN> PromoteToCatalogUseCase<WMS, LR, MMR, PR, RUN>
where
    WMS: WorkspaceManifestStore,
    LR: LockfileReader,
    MMR: MemberManifestReader,
    PR: ProgressReporter,
    RUN: PackageManagerRunner,
{
    pub fn new(inspector: InspectWorkspaceUseCase<WMS, LR, MMR, PR>, runner: RUN) -> Self {
        Self { inspector, runner }
    }

    /// The reload pipeline this use case runs after each promotion
    pub fn inspector(&self) -> &InspectWorkspaceUseCase<WMS, LR, MMR, PR> {
        &self.inspector
    }

    /// Executes one promotion against the session's current snapshot
    ///
    /// # Errors
    /// Returns an error only when the request is rejected before any side
    /// effect: no snapshot yet, `NotRecommended`, or `PromotionInFlight`.
    /// Failures after that are reported in the returned outcome.
    ///
    /// The reload after the install step reads the workspace with blocking
    /// filesystem calls on the current task.
    pub async fn execute(
        &self,
        session: &WorkspaceSession,
        request: PromotionRequest,
    ) -> Result<PromotionOutcome> {
        let snapshot = session.require_snapshot()?;
        let name = request.name.as_str();

        let not_recommended = || CatalogError::NotRecommended {
            name: name.to_string(),
        };
        if !snapshot.is_recommended(name) {
            return Err(not_recommended().into());
        }
        let (version, consumers) = snapshot
            .declared
            .get(name)
            .and_then(|dep| dep.sole_version())
            .map(|(version, consumers)| (version.to_string(), distinct(consumers)))
            .ok_or_else(not_recommended)?;
        let selectors = filter_selectors(&snapshot, name, &version);

        let guard = session.begin_promotion(name)?;
        let progress = self.inspector.progress_reporter();
        progress.report(&format!(
            "📦 Promoting {}@{} for {} package(s)",
            name,
            version,
            consumers.len()
        ));

        let result = self
            .run_steps(session, &request, &version, &selectors)
            .await;

        let (state, manifest_written, error) = match result {
            Ok(()) => {
                if let Err(e) = self.inspector.execute(session) {
                    progress.report_error(&format!(
                        "⚠️  Warning: {} was promoted but reloading the workspace failed: {}",
                        name, e
                    ));
                }
                progress.report_completion(&format!("✅ {} now uses {}", name, CATALOG_REFERENCE));
                (PromotionState::Succeeded, true, None)
            }
            Err(failure) => {
                progress.report_error(&format!("❌ Promotion of {} failed: {}", name, failure.error));
                if failure.manifest_written {
                    // Disk changed; do not keep showing pre-promotion state
                    if let Err(e) = self.inspector.execute(session) {
                        progress.report_error(&format!(
                            "⚠️  Warning: Reload after failed promotion of {} failed: {}",
                            name, e
                        ));
                    }
                }
                (
                    PromotionState::Failed,
                    failure.manifest_written,
                    Some(format!("{:#}", failure.error)),
                )
            }
        };

        guard.finish(state);

        Ok(PromotionOutcome {
            name: name.to_string(),
            version,
            consumers,
            state,
            manifest_written,
            error,
        })
    }

    async fn run_steps(
        &self,
        session: &WorkspaceSession,
        request: &PromotionRequest,
        version: &str,
        selectors: &[String],
    ) -> std::result::Result<(), StepFailure> {
        self.write_catalog_entry(session, &request.name, version)
            .map_err(|error| StepFailure {
                manifest_written: false,
                error,
            })?;

        self.install_from_catalog(session, request, selectors)
            .await
            .map_err(|error| StepFailure {
                manifest_written: true,
                error,
            })
    }

    /// Read-modify-write of the catalog block under the session's manifest lock
    fn write_catalog_entry(&self, session: &WorkspaceSession, name: &str, version: &str) -> Result<()> {
        let _manifest_lock = session.lock_manifest();
        let store = self.inspector.manifest_store();

        let mut manifest = store.load_workspace_manifest(session.root())?;
        if let Some(previous) = manifest.set_catalog_entry(name, version) {
            if previous != version {
                self.inspector.progress_reporter().report(&format!(
                    "   - Replacing catalog entry {}: {} -> {}",
                    name, previous, version
                ));
            }
        }
        store.save_workspace_manifest(session.root(), &manifest)
    }

    async fn install_from_catalog(
        &self,
        session: &WorkspaceSession,
        request: &PromotionRequest,
        selectors: &[String],
    ) -> Result<()> {
        let invocation = Self::add_invocation(session, request, selectors);
        let command = invocation.display();

        let _install_lock = session.lock_install().await;
        let progress = self.inspector.progress_reporter();
        progress.start_task(&request.name, &command);
        let output = self.runner.run(&invocation).await;
        progress.finish_task(&request.name);

        let output = output?;
        if !output.success() {
            return Err(CatalogError::CommandFailed {
                command,
                code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// `pnpm -C <root> --filter <a> --filter <b> add <name>@catalog: -D`
    fn add_invocation(
        session: &WorkspaceSession,
        request: &PromotionRequest,
        selectors: &[String],
    ) -> CommandInvocation {
        let mut args = vec!["-C".to_string(), session.root().display().to_string()];
        for selector in selectors {
            args.push("--filter".to_string());
            args.push(selector.clone());
        }
        args.push("add".to_string());
        args.push(format!("{}@{}", request.name, CATALOG_REFERENCE));
        args.push("-D".to_string());

        CommandInvocation::new(request.pnpm_command.clone(), args, request.timeout)
    }
}

/// `--filter` selectors for every member declaring `name` at `version`,
/// in member order without repeats
fn filter_selectors(snapshot: &WorkspaceSnapshot, name: &str, version: &str) -> Vec<String> {
    let selectors: Vec<String> = snapshot
        .members
        .iter()
        .filter(|member| {
            member
                .declared()
                .any(|(dep, specifier)| dep == name && specifier == version)
        })
        .map(MemberPackage::filter_selector)
        .collect();
    distinct(&selectors)
}

/// Consumer names without repeats, first-seen order
fn distinct(consumers: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(consumers.len());
    for consumer in consumers {
        if !seen.contains(consumer) {
            seen.push(consumer.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace_analysis::domain::PackageManifest;

    #[test]
    fn test_distinct_keeps_first_seen_order() {
        let consumers = vec![
            "web".to_string(),
            "api".to_string(),
            "web".to_string(),
        ];
        assert_eq!(distinct(&consumers), vec!["web", "api"]);
    }

    #[test]
    fn test_filter_selectors_select_nameless_members_by_path() {
        let api = MemberPackage::from_manifest(
            "packages/api".into(),
            PackageManifest::parse(r#"{"name":"@acme/api","dependencies":{"lodash":"^4.0.0"}}"#)
                .unwrap(),
        );
        let web = MemberPackage::from_manifest(
            "packages/web".into(),
            PackageManifest::parse(
                r#"{"dependencies":{"lodash":"^4.0.0"},"devDependencies":{"lodash":"^4.0.0"}}"#,
            )
            .unwrap(),
        );
        let other = MemberPackage::from_manifest(
            "packages/docs".into(),
            PackageManifest::parse(r#"{"name":"docs","dependencies":{"lodash":"^3.0.0"}}"#)
                .unwrap(),
        );
        let snapshot = WorkspaceSnapshot {
            members: vec![api, web, other],
            ..WorkspaceSnapshot::default()
        };

        assert_eq!(
            filter_selectors(&snapshot, "lodash", "^4.0.0"),
            vec!["@acme/api", "./packages/web"]
        );
    }
}
