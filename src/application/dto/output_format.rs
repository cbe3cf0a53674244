/// Output format of the workspace report
///
/// Both the CLI and the config file name a format; the formatter factory
/// turns it into a concrete formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Human-readable Markdown format
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    /// Accepts `json`, `markdown` or `md`, ignoring case and surrounding
    /// whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [
            ("json", OutputFormat::Json),
            ("markdown", OutputFormat::Markdown),
            ("md", OutputFormat::Markdown),
        ]
        .into_iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, format)| format)
        .ok_or_else(|| format!("unknown report format '{}' (expected json or markdown)", s))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_names_and_alias() {
        assert_eq!("json".parse(), Ok(OutputFormat::Json));
        assert_eq!("Markdown".parse(), Ok(OutputFormat::Markdown));
        assert_eq!("MD".parse(), Ok(OutputFormat::Markdown));
    }

    #[test]
    fn test_trims_config_values() {
        assert_eq!(" markdown\n".parse(), Ok(OutputFormat::Markdown));
    }

    #[test]
    fn test_rejects_unknown_and_empty() {
        let error = "cyclonedx".parse::<OutputFormat>().unwrap_err();
        assert!(error.contains("'cyclonedx'"));
        assert!(error.contains("json or markdown"));
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in [OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(format.to_string().parse(), Ok(format));
        }
    }
}
