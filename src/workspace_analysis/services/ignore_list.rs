use crate::shared::Result;

/// Names known to be harmless when duplicated across manifests
pub const DEFAULT_IGNORED_PACKAGES: [&str; 4] = ["clsx", "eventemitter2", "nanoid", "rimraf"];

/// Maximum number of ignore patterns
const MAX_IGNORE_PATTERNS: usize = 256;

/// Maximum length of a single ignore pattern (npm's own name limit is 214)
const MAX_PATTERN_LENGTH: usize = 214;

/// IgnoreList - operator-maintained names excluded from the manifest
/// duplicate list
///
/// Entries are exact package names or patterns with `*` wildcards, such as
/// `@types/*` or `eslint-plugin-*`.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreList {
    /// Creates an IgnoreList from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns
    /// - A pattern is empty, too long, only wildcards, or has invalid characters
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_IGNORE_PATTERNS {
            anyhow::bail!(
                "Too many ignore patterns: {} (maximum: {})",
                patterns.len(),
                MAX_IGNORE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(IgnorePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// The built-in list used when no configuration overrides it
    pub fn builtin() -> Self {
        Self {
            patterns: DEFAULT_IGNORED_PACKAGES
                .iter()
                .map(|name| IgnorePattern {
                    original: name.to_string(),
                    parts: vec![name.to_string()],
                })
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds more patterns on top of the current ones
    pub fn extend(mut self, patterns: Vec<String>) -> Result<Self> {
        let extra = Self::new(patterns)?;
        for pattern in extra.patterns {
            if !self.patterns.iter().any(|p| p.original == pattern.original) {
                self.patterns.push(pattern);
            }
        }
        Ok(self)
    }

    pub fn is_ignored(&self, package_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(package_name))
    }

    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.original.as_str()).collect()
    }

    /// Patterns that match none of the given names
    pub fn unmatched<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        self.patterns
            .iter()
            .filter(|p| !names.clone().into_iter().any(|name| p.matches(name)))
            .map(|p| p.original.clone())
            .collect()
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A single pattern, split at its wildcards
#[derive(Debug, Clone)]
struct IgnorePattern {
    original: String,
    /// Literal segments between `*`; a single part means an exact match
    parts: Vec<String>,
}

impl IgnorePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let parts = pattern.split('*').map(str::to_string).collect();
        Ok(Self {
            original: pattern,
            parts,
        })
    }

    fn matches(&self, name: &str) -> bool {
        let (first, rest) = match self.parts.split_first() {
            Some(split) => split,
            None => return false,
        };
        if rest.is_empty() {
            return name == first;
        }
        let Some(mut remaining) = name.strip_prefix(first.as_str()) else {
            return false;
        };

        // Middle segments match greedily left to right, the last one anchors at the end
        let (last, middle) = match rest.split_last() {
            Some(split) => split,
            None => return true,
        };
        for part in middle {
            match remaining.find(part.as_str()) {
                Some(pos) => remaining = &remaining[pos + part.len()..],
                None => return false,
            }
        }
        remaining.ends_with(last.as_str())
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Ignore pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Ignore pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Ignore pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, '-', '_', '.', '@', '/' and '*' are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!("Ignore pattern cannot contain only wildcards: '{}'", pattern);
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/' | '*' | '~')
}
