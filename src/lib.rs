//! pnpm-catalog - dependency consolidation for pnpm workspaces
//!
//! This library reads a pnpm workspace (`pnpm-workspace.yaml`, every member
//! `package.json` and `pnpm-lock.yaml`), reports duplicated dependencies and
//! catalog candidates, and promotes candidates into the workspace catalog.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`workspace_analysis`): Pure aggregation and classification logic
//! - **Application Layer** (`application`): Session state, use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pnpm_catalog::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let session = WorkspaceSession::new(PathBuf::from("."), IgnoreList::builtin());
//!
//! // Create use case with injected adapters
//! let use_case = InspectWorkspaceUseCase::new(
//!     WorkspaceManifestFile::new(),
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Load and render
//! let snapshot = use_case.execute(&session)?;
//! let report = WorkspaceReportBuilder::build(&snapshot, vec![]);
//! println!("{}", MarkdownFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod workspace_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter, WorkspaceManifestFile,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::process::PnpmCommandRunner;
    pub use crate::application::dto::{
        OutputFormat, PromotionOutcome, PromotionRequest, PromotionState,
    };
    pub use crate::application::read_models::{WorkspaceReport, WorkspaceReportBuilder};
    pub use crate::application::session::WorkspaceSession;
    pub use crate::application::use_cases::{InspectWorkspaceUseCase, PromoteToCatalogUseCase};
    pub use crate::ports::outbound::{
        CommandInvocation, CommandOutput, LockfileReader, MemberManifestReader, OutputPresenter,
        PackageManagerRunner, ProgressReporter, ReportFormatter, WorkspaceManifestStore,
    };
    pub use crate::shared::error::CatalogError;
    pub use crate::shared::Result;
    pub use crate::workspace_analysis::domain::{
        DeclaredAggregate, ManifestDuplicate, MemberPackage, PnpmLockfile, ResolvedAggregate,
        WorkspaceManifest, WorkspaceSnapshot,
    };
    pub use crate::workspace_analysis::services::{
        CatalogRecommender, DeclaredAggregator, DuplicateClassifier, IgnoreList,
        ResolvedAggregator,
    };
}
