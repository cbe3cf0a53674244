/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod promotion;

pub use output_format::OutputFormat;
pub use promotion::{
    PromotionOutcome, PromotionRequest, PromotionState, DEFAULT_COMMAND_TIMEOUT,
    DEFAULT_PNPM_COMMAND,
};
