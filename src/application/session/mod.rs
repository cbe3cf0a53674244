//! Session state shared by the inspect and promote use cases

mod promotion_guard;
mod workspace_session;

pub use promotion_guard::PromotionGuard;
pub use workspace_session::WorkspaceSession;
