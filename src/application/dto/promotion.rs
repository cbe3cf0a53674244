use serde::Serialize;
use std::time::Duration;

/// Default package manager binary
pub const DEFAULT_PNPM_COMMAND: &str = "pnpm";

/// Default limit for one `pnpm add` run
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(300);

/// PromotionRequest - ask to move one dependency into the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionRequest {
    /// Dependency name; must be in the current recommendation list
    pub name: String,
    pub pnpm_command: String,
    pub timeout: Duration,
}

impl PromotionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pnpm_command: DEFAULT_PNPM_COMMAND.to_string(),
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    pub fn with_pnpm_command(mut self, pnpm_command: impl Into<String>) -> Self {
        self.pnpm_command = pnpm_command.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Lifecycle of a promotion, tracked per dependency name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl std::fmt::Display for PromotionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionState::Idle => write!(f, "idle"),
            PromotionState::InFlight => write!(f, "in flight"),
            PromotionState::Succeeded => write!(f, "succeeded"),
            PromotionState::Failed => write!(f, "failed"),
        }
    }
}

/// PromotionOutcome - what happened to one accepted promotion
///
/// Requests rejected before any side effect (not recommended, already in
/// flight) are returned as errors instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionOutcome {
    pub name: String,
    /// The specifier written into the catalog
    pub version: String,
    /// Distinct consumer names passed as `--filter`
    pub consumers: Vec<String>,
    pub state: PromotionState,
    /// Whether `pnpm-workspace.yaml` was rewritten
    pub manifest_written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PromotionOutcome {
    pub fn succeeded(&self) -> bool {
        self.state == PromotionState::Succeeded
    }
}
