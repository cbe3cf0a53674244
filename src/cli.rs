use clap::{Parser, Subcommand};
use pnpm_catalog::application::dto::OutputFormat;

/// Find duplicated dependency ranges in a pnpm workspace and move shared
/// ranges into the workspace catalog
#[derive(Parser, Debug)]
#[command(name = "pnpm-catalog")]
#[command(version)]
#[command(about = "Inspect pnpm workspace dependencies and promote shared ranges into the catalog", long_about = None)]
pub struct Args {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Config file (defaults to pnpm-catalog.config.yml in the workspace root)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Also ignore packages matching patterns in the conflicting-ranges list
    /// (supports wildcards: *). Can be specified multiple times: -i "@types/*" -i tslib
    #[arg(short, long = "ignore", value_name = "PATTERN", global = true)]
    pub ignore: Vec<String>,

    /// Exit with code 1 when conflicting ranges or catalog candidates are found
    #[arg(long, global = true)]
    pub check: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print duplicates, catalog recommendations and declared dependencies (default)
    Report,

    /// Move recommended dependencies into the catalog and reinstall them
    Promote {
        /// Dependency names from the recommendation list
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,

        /// Seconds to wait for each `pnpm add` [default: 300]
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// pnpm executable to run [default: pnpm]
        #[arg(long, value_name = "BIN")]
        pnpm: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_report() {
        let args = Args::try_parse_from(["pnpm-catalog"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.format.is_none());
        assert!(!args.check);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args =
            Args::try_parse_from(["pnpm-catalog", "report", "-f", "md", "--check", "-i", "tslib"])
                .unwrap();
        assert_eq!(args.command, Some(Command::Report));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert!(args.check);
        assert_eq!(args.ignore, vec!["tslib"]);
    }

    #[test]
    fn test_promote_names_and_options() {
        let args = Args::try_parse_from([
            "pnpm-catalog",
            "-p",
            "repo",
            "promote",
            "lodash",
            "zod",
            "--timeout",
            "60",
            "--pnpm",
            "/opt/pnpm",
        ])
        .unwrap();

        assert_eq!(args.path.as_deref(), Some("repo"));
        assert_eq!(
            args.command,
            Some(Command::Promote {
                names: vec!["lodash".to_string(), "zod".to_string()],
                timeout: Some(60),
                pnpm: Some("/opt/pnpm".to_string()),
            })
        );
    }

    #[test]
    fn test_promote_requires_a_name() {
        assert!(Args::try_parse_from(["pnpm-catalog", "promote"]).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Args::try_parse_from(["pnpm-catalog", "promote", "lodash", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Args::try_parse_from(["pnpm-catalog", "-f", "xml"]).is_err());
    }
}
