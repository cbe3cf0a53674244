mod catalog_recommender;
mod declared_aggregator;
mod duplicate_classifier;
mod ignore_list;
mod member_discovery;
mod resolved_aggregator;
mod snapshot_builder;

pub use catalog_recommender::{CatalogRecommender, CATALOG_REFERENCE, WORKSPACE_PREFIX};
pub use declared_aggregator::DeclaredAggregator;
pub use duplicate_classifier::DuplicateClassifier;
pub use ignore_list::{IgnoreList, DEFAULT_IGNORED_PACKAGES};
pub use member_discovery::{MemberDiscovery, MemberPattern};
pub use resolved_aggregator::ResolvedAggregator;
pub use snapshot_builder::{SnapshotBuilder, SnapshotInputs};
