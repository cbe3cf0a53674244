use std::path::{Path, PathBuf};

/// One entry of the workspace `packages` list, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberPattern {
    /// `packages/*`: every immediate child of the base directory
    Children(PathBuf),
    /// `tools/cli`: exactly one member directory
    Single(PathBuf),
    /// `!**/test/**`: exclusion, contributes no members
    Exclude(String),
}

impl MemberPattern {
    /// Interprets a pattern relative to the workspace root.
    ///
    /// The trailing wildcard (`*` or `**`) and separator are stripped to get
    /// the base directory; nested globs are not expanded beyond immediate
    /// children.
    pub fn parse(root: &Path, pattern: &str) -> Self {
        let pattern = pattern.trim();
        if pattern.starts_with('!') {
            return MemberPattern::Exclude(pattern.to_string());
        }

        let trimmed = pattern.trim_start_matches("./").trim_end_matches('/');
        match trimmed.strip_suffix('*') {
            Some(base) => {
                let base = base.trim_end_matches('*').trim_end_matches('/');
                MemberPattern::Children(root.join(base))
            }
            None => MemberPattern::Single(root.join(trimmed)),
        }
    }
}

/// MemberDiscovery - turns workspace patterns into the ordered pattern list
pub struct MemberDiscovery;

impl MemberDiscovery {
    /// Parses all patterns, keeping the order they were given in
    pub fn plan(root: &Path, patterns: &[String]) -> Vec<MemberPattern> {
        patterns
            .iter()
            .map(|pattern| MemberPattern::parse(root, pattern))
            .collect()
    }
}
