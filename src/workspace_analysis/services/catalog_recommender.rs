use crate::workspace_analysis::domain::DeclaredAggregate;

/// Specifier that points a dependency at the default catalog
pub const CATALOG_REFERENCE: &str = "catalog:";

/// Prefix of specifiers that point at another workspace member
pub const WORKSPACE_PREFIX: &str = "workspace:";

/// CatalogRecommender - finds dependencies worth moving into the catalog
///
/// A candidate has exactly one declared specifier, that specifier is a
/// literal range (not `catalog:`, not `workspace:*`), and more than one
/// consumer entry repeats it.
pub struct CatalogRecommender;

impl CatalogRecommender {
    pub fn recommend(declared: &DeclaredAggregate) -> Vec<String> {
        declared
            .iter()
            .filter(|(_, dep)| {
                dep.sole_version().is_some_and(|(specifier, consumers)| {
                    specifier != CATALOG_REFERENCE
                        && !specifier.starts_with(WORKSPACE_PREFIX)
                        && consumers.len() > 1
                })
            })
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace_analysis::domain::DeclaredDependency;

    /// `(name, specifier, consumer)` rows
    fn aggregate(rows: &[(&str, &str, &str)]) -> DeclaredAggregate {
        let mut aggregate = DeclaredAggregate::new();
        for (name, spec, consumer) in rows {
            aggregate
                .entry(name.to_string())
                .or_insert_with(DeclaredDependency::default)
                .add_consumer(spec, consumer);
        }
        aggregate
    }

    #[test]
    fn test_recommends_shared_literal_range() {
        let declared = aggregate(&[("lodash", "^4.0.0", "p1"), ("lodash", "^4.0.0", "p2")]);
        assert_eq!(CatalogRecommender::recommend(&declared), vec!["lodash"]);
    }

    #[test]
    fn test_skips_multiple_specifiers() {
        let declared = aggregate(&[("react", "^18.0.0", "p1"), ("react", "^17.0.0", "p2")]);
        assert!(CatalogRecommender::recommend(&declared).is_empty());
    }

    #[test]
    fn test_skips_single_consumer() {
        let declared = aggregate(&[("hono", "^4.0.0", "api")]);
        assert!(CatalogRecommender::recommend(&declared).is_empty());
    }

    #[test]
    fn test_skips_catalog_and_workspace_references() {
        let declared = aggregate(&[
            ("typescript", "catalog:", "p1"),
            ("typescript", "catalog:", "p2"),
            ("@acme/ui", "workspace:*", "p1"),
            ("@acme/ui", "workspace:*", "p2"),
            ("@acme/config", "workspace:^", "p1"),
            ("@acme/config", "workspace:^", "p2"),
        ]);
        assert!(CatalogRecommender::recommend(&declared).is_empty());
    }

    #[test]
    fn test_counts_repeated_consumer_entries() {
        // Same member in dependencies and devDependencies
        let declared = aggregate(&[("tslib", "^2.6.0", "p1"), ("tslib", "^2.6.0", "p1")]);
        assert_eq!(CatalogRecommender::recommend(&declared), vec!["tslib"]);
    }

    #[test]
    fn test_recommend_is_idempotent_and_ordered() {
        let declared = aggregate(&[
            ("zod", "^3.22.0", "p1"),
            ("react", "^18.0.0", "p1"),
            ("dayjs", "^1.11.0", "p1"),
            ("zod", "^3.22.0", "p2"),
            ("react", "^17.0.0", "p2"),
            ("dayjs", "^1.11.0", "p3"),
        ]);

        let first = CatalogRecommender::recommend(&declared);
        let second = CatalogRecommender::recommend(&declared);
        assert_eq!(first, vec!["zod", "dayjs"]);
        assert_eq!(first, second);
    }
}
