//! Repository contracts shared by every entity store.
//!
//! # Responsibility
//! - Define CRUD and search contracts over a generic `Entity`.
//! - Define the semantic errors repository callers must handle.
//!
//! # Invariants
//! - `find_by_id`, `update` and `delete` report `NotFound` for unknown ids.
//! - A failed write leaves the stored collection unchanged.

use crate::model::entity::Entity;
use crate::model::validation::EntityValidationError;
use crate::search::params::SearchParams;
use crate::search::result::SearchResult;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence, lookup and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No stored entity carries the requested identifier.
    NotFound(String),
    /// Entity construction or mutation produced invalid field values.
    Validation(EntityValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Entity not found using ID '{id}'"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<EntityValidationError> for RepoError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for entity CRUD operations.
pub trait Repository<E: Entity> {
    /// Appends `entity`; identifiers are not checked for duplicates.
    fn insert(&self, entity: E) -> RepoResult<()>;
    /// Returns the first entity whose id equals `id`.
    fn find_by_id(&self, id: &str) -> RepoResult<E>;
    /// Returns every stored entity in collection order.
    fn find_all(&self) -> RepoResult<Vec<E>>;
    /// Replaces the stored entity with the same id, keeping its position.
    fn update(&self, entity: E) -> RepoResult<()>;
    /// Removes the entity with the given id.
    fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Repository that also answers filtered, sorted, paginated queries.
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Repository-specific filter payload.
    type Filter: Clone;

    /// Sort field names accepted by `search`.
    fn sortable_fields(&self) -> &[&'static str];

    /// Runs filter, then sort, then pagination.
    ///
    /// `total` in the result counts filtered entities before pagination.
    fn search(
        &self,
        params: &SearchParams<Self::Filter>,
    ) -> RepoResult<SearchResult<E, Self::Filter>>;
}

#[cfg(test)]
mod tests {
    use super::RepoError;
    use crate::model::validation::{EntityValidationError, ErrorFields};
    use std::error::Error;

    #[test]
    fn not_found_message_contains_id() {
        let err = RepoError::NotFound("fake id".to_string());
        assert_eq!(err.to_string(), "Entity not found using ID 'fake id'");
        assert!(err.source().is_none());
    }

    #[test]
    fn validation_error_exposes_source() {
        let err = RepoError::from(EntityValidationError::new(ErrorFields::new()));
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(err.source().is_some());
    }
}
