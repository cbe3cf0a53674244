/// Use cases module containing application business logic orchestration
mod inspect_workspace;
mod promote_to_catalog;

pub use inspect_workspace::InspectWorkspaceUseCase;
pub use promote_to_catalog::PromoteToCatalogUseCase;
