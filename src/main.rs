mod cli;
mod config;

use cli::{Args, Command};
use config::ConfigFile;
use futures::future::join_all;
use pnpm_catalog::adapters::outbound::console::StderrProgressReporter;
use pnpm_catalog::adapters::outbound::filesystem::{FileSystemReader, WorkspaceManifestFile};
use pnpm_catalog::adapters::outbound::process::PnpmCommandRunner;
use pnpm_catalog::application::dto::{
    OutputFormat, PromotionOutcome, PromotionRequest, DEFAULT_COMMAND_TIMEOUT,
    DEFAULT_PNPM_COMMAND,
};
use pnpm_catalog::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pnpm_catalog::application::read_models::WorkspaceReportBuilder;
use pnpm_catalog::application::session::WorkspaceSession;
use pnpm_catalog::application::use_cases::{InspectWorkspaceUseCase, PromoteToCatalogUseCase};
use pnpm_catalog::ports::outbound::ProgressReporter;
use pnpm_catalog::shared::error::{CatalogError, ExitCode};
use pnpm_catalog::shared::Result;
use pnpm_catalog::workspace_analysis::services::IgnoreList;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Settings after merging the config file under the CLI options
struct Settings {
    format: OutputFormat,
    check: bool,
    ignore_list: IgnoreList,
    pnpm_command: String,
    command_timeout: Duration,
}

impl Settings {
    fn merge(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse().map_err(|message| CatalogError::Validation {
                message: format!("config field 'format': {}", message),
            })?,
            (None, None) => OutputFormat::Json,
        };

        let ignore_list = match config.ignore_packages {
            Some(patterns) => IgnoreList::new(patterns)?,
            None => IgnoreList::builtin(),
        }
        .extend(args.ignore.clone())?;

        let (cli_timeout, cli_pnpm) = match &args.command {
            Some(Command::Promote { timeout, pnpm, .. }) => (*timeout, pnpm.clone()),
            _ => (None, None),
        };

        Ok(Self {
            format,
            check: args.check || config.check.unwrap_or(false),
            ignore_list,
            pnpm_command: cli_pnpm
                .or(config.pnpm_command)
                .unwrap_or_else(|| DEFAULT_PNPM_COMMAND.to_string()),
            command_timeout: cli_timeout
                .or(config.command_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_COMMAND_TIMEOUT),
        })
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Validate workspace directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let workspace_root = validate_project_path(Path::new(project_dir))?;

    let config = match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&workspace_root)?.unwrap_or_default(),
    };
    let settings = Settings::merge(&args, config)?;

    let session = WorkspaceSession::new(workspace_root, settings.ignore_list.clone());

    // Create adapters (Dependency Injection)
    let inspector = InspectWorkspaceUseCase::new(
        WorkspaceManifestFile::new(),
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let mut promotion_failed = false;
    let promotions = match &args.command {
        Some(Command::Promote { names, .. }) => {
            let use_case = PromoteToCatalogUseCase::new(inspector, PnpmCommandRunner::new());
            use_case.inspector().execute(&session)?;

            let requests = names.iter().map(|name| {
                PromotionRequest::new(name.as_str())
                    .with_pnpm_command(settings.pnpm_command.as_str())
                    .with_timeout(settings.command_timeout)
            });
            let results = join_all(requests.map(|request| use_case.execute(&session, request))).await;

            let mut outcomes: Vec<PromotionOutcome> = Vec::new();
            for (name, result) in names.iter().zip(results) {
                match result {
                    Ok(outcome) => {
                        promotion_failed |= !outcome.succeeded();
                        outcomes.push(outcome);
                    }
                    Err(e) => {
                        promotion_failed = true;
                        use_case
                            .inspector()
                            .progress_reporter()
                            .report_error(&format!("❌ Skipped {}: {}", name, e));
                    }
                }
            }
            outcomes
        }
        Some(Command::Report) | None => {
            inspector.execute(&session)?;
            Vec::new()
        }
    };

    let snapshot = session.require_snapshot()?;
    let report = WorkspaceReportBuilder::build(&snapshot, promotions);

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.map(PathBuf::from)));
    presenter.present(&formatted_output)?;

    if promotion_failed {
        return Ok(ExitCode::ApplicationError);
    }
    if settings.check && report.has_issues() {
        eprintln!(
            "⚠️  {} conflicting range(s) and {} catalog candidate(s) found.",
            report.summary.manifest_duplicate_count, report.summary.recommendation_count
        );
        return Ok(ExitCode::IssuesDetected);
    }
    Ok(ExitCode::Success)
}

/// Validates the workspace directory and returns its canonical path
fn validate_project_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CatalogError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| CatalogError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(CatalogError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(CatalogError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    // pnpm is run with `-C <root>`, so hand it an absolute path
    path.canonicalize().map_err(|e| {
        CatalogError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_returns_canonical_directory() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = validate_project_path(temp_dir.path()).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let err = validate_project_path(Path::new("/nonexistent/path/that/does/not/exist"))
            .unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let args = Args::try_parse_from([
            "pnpm-catalog",
            "-f",
            "markdown",
            "-i",
            "tslib",
            "promote",
            "lodash",
            "--timeout",
            "30",
        ])
        .unwrap();
        let config = ConfigFile {
            format: Some("json".to_string()),
            ignore_packages: Some(vec!["react".to_string()]),
            pnpm_command: Some("/opt/pnpm".to_string()),
            command_timeout_secs: Some(600),
            check: Some(true),
            ..Default::default()
        };

        let settings = Settings::merge(&args, config).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert!(settings.check);
        assert_eq!(settings.pnpm_command, "/opt/pnpm");
        assert_eq!(settings.command_timeout, Duration::from_secs(30));
        // Config list replaces the built-in one, --ignore adds to it
        assert!(settings.ignore_list.is_ignored("react"));
        assert!(settings.ignore_list.is_ignored("tslib"));
        assert!(!settings.ignore_list.is_ignored("rimraf"));
    }

    #[test]
    fn test_settings_defaults() {
        let args = Args::try_parse_from(["pnpm-catalog"]).unwrap();
        let settings = Settings::merge(&args, ConfigFile::default()).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.check);
        assert_eq!(settings.pnpm_command, "pnpm");
        assert_eq!(settings.command_timeout, DEFAULT_COMMAND_TIMEOUT);
        assert!(settings.ignore_list.is_ignored("rimraf"));
    }

    #[test]
    fn test_settings_invalid_config_format() {
        let args = Args::try_parse_from(["pnpm-catalog"]).unwrap();
        let config = ConfigFile {
            format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = Settings::merge(&args, config).err().unwrap();
        assert!(err.to_string().contains("config field 'format'"));
    }
}
