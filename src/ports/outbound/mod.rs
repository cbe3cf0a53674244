/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, processes, console).
pub mod lockfile_reader;
pub mod member_manifest_reader;
pub mod output_presenter;
pub mod package_manager_runner;
pub mod progress_reporter;
pub mod report_formatter;
pub mod workspace_manifest_store;

pub use lockfile_reader::{LockfileReader, LOCKFILE_NAME};
pub use member_manifest_reader::{MemberManifestReader, MEMBER_MANIFEST_NAME};
pub use output_presenter::OutputPresenter;
pub use package_manager_runner::{CommandInvocation, CommandOutput, PackageManagerRunner};
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use workspace_manifest_store::{WorkspaceManifestStore, WORKSPACE_MANIFEST_NAME};
