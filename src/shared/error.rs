use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a clean workspace apart from one
/// that still has consolidation work left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - nothing to report, or `--check` was not requested
    Success = 0,
    /// `--check` found manifest duplicates or catalog candidates
    IssuesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse error, package manager failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IssuesDetected => write!(f, "Issues Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for workspace inspection and catalog promotion.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("pnpm-workspace.yaml not found: {path}\n\n💡 Hint: {suggestion}")]
    WorkspaceManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse pnpm-workspace.yaml: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is valid YAML with a `packages` list")]
    WorkspaceManifestParseError { path: PathBuf, details: String },

    #[error("pnpm-lock.yaml not found: {path}\n\n💡 Hint: Run `pnpm install` in the workspace root to create the lockfile")]
    LockfileNotFound { path: PathBuf },

    #[error("Failed to parse pnpm-lock.yaml: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the lockfile is in the correct format")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify the root directory of a pnpm workspace")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("'{name}' is not a catalog candidate\n\n💡 Hint: Only dependencies declared with one identical range by several packages can be promoted")]
    NotRecommended { name: String },

    #[error("A catalog promotion for '{name}' is already running")]
    PromotionInFlight { name: String },

    #[error("Failed to start `{command}`: {details}\n\n💡 Hint: Make sure pnpm is installed and on your PATH, or set `pnpm_command` in the config file")]
    CommandSpawnError { command: String, details: String },

    #[error("`{command}` exited with code {code:?}\n{stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{command}` did not finish within {timeout_secs}s\n\n💡 Hint: The workspace may be partially updated. Re-run `pnpm install` and inspect the result")]
    CommandTimeout { command: String, timeout_secs: u64 },

    #[error("No workspace has been loaded yet")]
    WorkspaceNotLoaded,

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
