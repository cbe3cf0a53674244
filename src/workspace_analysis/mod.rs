/// Workspace analysis domain - pure dependency reconciliation logic
///
/// Nothing in this module performs I/O. Inputs are decoded manifests and
/// lockfiles, outputs are full replacement snapshots.
pub mod domain;
pub mod services;
