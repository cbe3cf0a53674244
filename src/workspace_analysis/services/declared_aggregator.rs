use crate::workspace_analysis::domain::{DeclaredAggregate, MemberPackage};

/// DeclaredAggregator - groups declared specifiers by dependency name
///
/// Pure function of its input: the same member order always yields the
/// same map, with names and specifiers in first-seen order.
pub struct DeclaredAggregator;

impl DeclaredAggregator {
    pub fn aggregate(members: &[MemberPackage]) -> DeclaredAggregate {
        let mut result = DeclaredAggregate::new();

        for member in members {
            for (name, specifier) in member.declared() {
                result
                    .entry(name.to_string())
                    .or_default()
                    .add_consumer(specifier, member.name());
            }
        }

        result
    }
}
