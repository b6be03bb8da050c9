//! Category use-cases.
//!
//! # Responsibility
//! - Provide create/get/list/update/delete entry points for categories.
//! - Map domain entities to caller-facing `CategoryOutput` values.
//!
//! # Invariants
//! - Each use-case performs exactly one repository write or query, after
//!   any lookup it needs.
//! - Validation or lookup failures abort before anything is persisted.
//! - Request defaults come from `Category` constants.

use crate::model::category::{Category, CategoryProps};
use crate::model::entity::Entity;
use crate::repo::category_repo::{CategoryRepository, CategorySearchParams};
use crate::repo::repository::RepoResult;
use crate::service::dto::{PaginationOutput, SearchInput};
use crate::service::use_case::UseCase;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Caller-facing category shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

/// Request for `CreateCategoryUseCase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Category::DEFAULT_DESCRIPTION,
            is_active: Category::DEFAULT_IS_ACTIVE,
        }
    }
}

pub type CreateCategoryOutput = CategoryOutput;

/// Validates and stores a new category.
pub struct CreateCategoryUseCase<'r, R: ?Sized> {
    repo: &'r R,
}

impl<'r, R: CategoryRepository + ?Sized> CreateCategoryUseCase<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryRepository + ?Sized> UseCase for CreateCategoryUseCase<'_, R> {
    type Input = CreateCategoryInput;
    type Output = CreateCategoryOutput;

    fn execute(&self, input: CreateCategoryInput) -> RepoResult<CreateCategoryOutput> {
        let category = Category::new(CategoryProps {
            description: input.description,
            is_active: input.is_active,
            ..CategoryProps::new(input.name)
        })?;
        let output = CategoryOutput::from(&category);
        self.repo.insert(category)?;
        Ok(output)
    }
}

/// Request for `GetCategoryUseCase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCategoryInput {
    pub id: String,
}

pub type GetCategoryOutput = CategoryOutput;

/// Loads one category by id.
pub struct GetCategoryUseCase<'r, R: ?Sized> {
    repo: &'r R,
}

impl<'r, R: CategoryRepository + ?Sized> GetCategoryUseCase<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryRepository + ?Sized> UseCase for GetCategoryUseCase<'_, R> {
    type Input = GetCategoryInput;
    type Output = GetCategoryOutput;

    fn execute(&self, input: GetCategoryInput) -> RepoResult<GetCategoryOutput> {
        let category = self.repo.find_by_id(&input.id)?;
        Ok(CategoryOutput::from(&category))
    }
}

/// Request for `ListCategoryUseCase`; filter is matched against `name`.
pub type ListCategoryInput = SearchInput<String>;
pub type ListCategoryOutput = PaginationOutput<CategoryOutput>;

/// Searches categories and returns one page.
pub struct ListCategoryUseCase<'r, R: ?Sized> {
    repo: &'r R,
}

impl<'r, R: CategoryRepository + ?Sized> ListCategoryUseCase<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryRepository + ?Sized> UseCase for ListCategoryUseCase<'_, R> {
    type Input = ListCategoryInput;
    type Output = ListCategoryOutput;

    fn execute(&self, input: ListCategoryInput) -> RepoResult<ListCategoryOutput> {
        let params = CategorySearchParams::from(input);
        let result = self.repo.search(&params)?;
        Ok(PaginationOutput::from_result(result, |category| {
            CategoryOutput::from(&category)
        }))
    }
}

/// Request for `UpdateCategoryUseCase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryInput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: Category::DEFAULT_DESCRIPTION,
            is_active: Category::DEFAULT_IS_ACTIVE,
        }
    }
}

pub type UpdateCategoryOutput = CategoryOutput;

/// Replaces name, description and active flag of a stored category.
pub struct UpdateCategoryUseCase<'r, R: ?Sized> {
    repo: &'r R,
}

impl<'r, R: CategoryRepository + ?Sized> UpdateCategoryUseCase<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryRepository + ?Sized> UseCase for UpdateCategoryUseCase<'_, R> {
    type Input = UpdateCategoryInput;
    type Output = UpdateCategoryOutput;

    fn execute(&self, input: UpdateCategoryInput) -> RepoResult<UpdateCategoryOutput> {
        let mut category = self.repo.find_by_id(&input.id)?;
        category.update(input.name, input.description)?;
        if input.is_active {
            category.activate();
        } else {
            category.deactivate();
        }

        let output = CategoryOutput::from(&category);
        self.repo.update(category)?;
        Ok(output)
    }
}

/// Request for `DeleteCategoryUseCase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCategoryInput {
    pub id: String,
}

/// Removes a category by id.
pub struct DeleteCategoryUseCase<'r, R: ?Sized> {
    repo: &'r R,
}

impl<'r, R: CategoryRepository + ?Sized> DeleteCategoryUseCase<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryRepository + ?Sized> UseCase for DeleteCategoryUseCase<'_, R> {
    type Input = DeleteCategoryInput;
    type Output = ();

    fn execute(&self, input: DeleteCategoryInput) -> RepoResult<()> {
        self.repo.delete(&input.id)
    }
}
