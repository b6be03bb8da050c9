//! Core domain logic for the category catalog.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{
    Category, CategoryProps, CategorySnapshot, CategoryValidator, NAME_MAX_LENGTH,
};
pub use model::entity::{Entity, InvalidUuidError, UniqueEntityId};
pub use model::validation::{
    EntityValidationError, ErrorFields, ValidationError, ValidatorFields, ValidatorRules,
};
pub use repo::category_repo::{
    CategoryInMemoryRepository, CategoryRepository, CategorySearchParams, CategorySearchPolicy,
    CategorySearchResult,
};
pub use repo::memory::{InMemoryRepository, SearchPolicy};
pub use repo::repository::{RepoError, RepoResult, Repository, SearchableRepository};
pub use search::params::{
    FilterValue, RawSearchParams, SearchParams, SortDirection, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
pub use search::result::SearchResult;
pub use service::category_service::{
    CategoryOutput, CreateCategoryInput, CreateCategoryUseCase, DeleteCategoryInput,
    DeleteCategoryUseCase, GetCategoryInput, GetCategoryUseCase, ListCategoryInput,
    ListCategoryOutput, ListCategoryUseCase, UpdateCategoryInput, UpdateCategoryUseCase,
};
pub use service::dto::{PaginationOutput, SearchInput};
pub use service::use_case::UseCase;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
