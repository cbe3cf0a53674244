use super::null_as_default;
use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Decoded `pnpm-lock.yaml`
///
/// Only the `packages` keys and the `snapshots` dependency edges are kept.
/// Absent or `null` tables decode as empty rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PnpmLockfile {
    /// Every resolved `name@version` instance; the values are not inspected
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: IndexMap<String, IgnoredAny>,
    /// Resolved instance key (possibly with peer suffix) to its edges
    #[serde(default, deserialize_with = "snapshot_table")]
    pub snapshots: IndexMap<String, LockSnapshot>,
}

/// Dependency edges pulled in by one resolved package instance
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LockSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: IndexMap<String, String>,
}

impl PnpmLockfile {
    pub fn parse(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str::<Option<Self>>(content)?.unwrap_or_default())
    }

    pub fn package_keys(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }
}

fn snapshot_table<'de, D>(deserializer: D) -> Result<IndexMap<String, LockSnapshot>, D::Error>
where
    D: Deserializer<'de>,
{
    let table: Option<IndexMap<String, Option<LockSnapshot>>> = Option::deserialize(deserializer)?;
    Ok(table
        .unwrap_or_default()
        .into_iter()
        .map(|(key, snapshot)| (key, snapshot.unwrap_or_default()))
        .collect())
}

/// Removes the parenthesized peer-dependency suffix from a resolved version
/// or instance key: `18.2.0(react@18.2.0)` becomes `18.2.0`.
pub fn strip_peer_suffix(value: &str) -> &str {
    match value.find('(') {
        Some(idx) => &value[..idx],
        None => value,
    }
}

/// Splits a lockfile package key into `(name, logical version)`.
///
/// The peer suffix is removed first, then the key is split at the last `@`
/// so scoped names like `@babel/core@7.24.0` keep their leading `@`. The
/// leading `/` of pre-v9 lockfile keys is ignored. Returns `None` when no
/// version separator exists.
pub fn split_package_key(key: &str) -> Option<(&str, &str)> {
    let key = strip_peer_suffix(key.trim_start_matches('/'));
    let idx = key.rfind('@')?;
    if idx == 0 {
        return None;
    }
    Some((&key[..idx], &key[idx + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKFILE: &str = r#"
lockfileVersion: '9.0'

settings:
  autoInstallPeers: true
  excludeLinksFromLockfile: false

importers:
  .: {}

packages:
  '@babel/core@7.24.0':
    resolution: {integrity: sha512-abc}
    engines: {node: '>=6.9.0'}
  lodash@4.17.21:
    resolution: {integrity: sha512-def}

snapshots:
  '@babel/core@7.24.0':
    dependencies:
      lodash: 4.17.21
  lodash@4.17.21: {}
  react-dom@18.2.0(react@18.2.0):
    dependencies:
      react: 18.2.0
      scheduler: 0.23.0
"#;

    #[test]
    fn test_parse_packages_and_snapshots() {
        let lockfile = PnpmLockfile::parse(LOCKFILE).unwrap();

        let keys: Vec<_> = lockfile.package_keys().collect();
        assert_eq!(keys, vec!["@babel/core@7.24.0", "lodash@4.17.21"]);

        assert_eq!(lockfile.snapshots.len(), 3);
        assert!(lockfile.snapshots["lodash@4.17.21"].dependencies.is_empty());
        let react_dom = &lockfile.snapshots["react-dom@18.2.0(react@18.2.0)"];
        assert_eq!(react_dom.dependencies["scheduler"], "0.23.0");
    }

    #[test]
    fn test_parse_tolerates_missing_tables() {
        let lockfile = PnpmLockfile::parse("lockfileVersion: '9.0'\n").unwrap();
        assert!(lockfile.packages.is_empty());
        assert!(lockfile.snapshots.is_empty());

        let lockfile = PnpmLockfile::parse("packages:\nsnapshots:\n  foo@1.0.0:\n").unwrap();
        assert!(lockfile.packages.is_empty());
        assert!(lockfile.snapshots["foo@1.0.0"].dependencies.is_empty());
    }

    #[test]
    fn test_parse_empty_document() {
        let lockfile = PnpmLockfile::parse("").unwrap();
        assert!(lockfile.packages.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(PnpmLockfile::parse("packages: [[[broken").is_err());
    }

    #[test]
    fn test_strip_peer_suffix() {
        assert_eq!(strip_peer_suffix("18.2.0(react@18.2.0)"), "18.2.0");
        assert_eq!(strip_peer_suffix("1.0.0(a@1.0.0)(b@2.0.0)"), "1.0.0");
        assert_eq!(strip_peer_suffix("4.17.21"), "4.17.21");
    }

    #[test]
    fn test_split_package_key_scoped_name() {
        assert_eq!(
            split_package_key("@babel/core@7.24.0"),
            Some(("@babel/core", "7.24.0"))
        );
    }

    #[test]
    fn test_split_package_key_with_peer_suffix() {
        assert_eq!(
            split_package_key("foo@1.0.0(peerDepA@2.0.0)"),
            Some(("foo", "1.0.0"))
        );
    }

    #[test]
    fn test_split_package_key_legacy_leading_slash() {
        assert_eq!(split_package_key("/lodash@4.17.21"), Some(("lodash", "4.17.21")));
    }

    #[test]
    fn test_split_package_key_without_version() {
        assert_eq!(split_package_key("lodash"), None);
        assert_eq!(split_package_key("@scope"), None);
    }
}
