/// Mock implementations for testing
mod mock_lockfile_reader;
mod mock_member_manifest_reader;
mod mock_package_manager_runner;
mod mock_progress_reporter;
mod mock_workspace_manifest_store;

pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_member_manifest_reader::MockMemberManifestReader;
pub use mock_package_manager_runner::MockPackageManagerRunner;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_workspace_manifest_store::MockWorkspaceManifestStore;
