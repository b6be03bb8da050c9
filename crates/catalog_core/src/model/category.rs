//! Category domain model.
//!
//! # Responsibility
//! - Define the canonical category record and its default values.
//! - Validate every construction and content update.
//!
//! # Invariants
//! - `name` is non-blank and at most `NAME_MAX_LENGTH` characters.
//! - `id` and `created_at` never change after construction.
//! - Mutation happens only through `update`, `activate` and `deactivate`.

use crate::model::entity::{Entity, UniqueEntityId};
use crate::model::validation::{
    push_field_error, EntityValidationError, ErrorFields, ValidatorFields,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Maximum number of characters accepted for `Category::name`.
pub const NAME_MAX_LENGTH: usize = 255;

const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Constructor input for `Category`.
///
/// Optional attributes start from the category defaults; `created_at = None`
/// means "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProps {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    /// Props with only `name` set and every other field defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Category::DEFAULT_DESCRIPTION,
            is_active: Category::DEFAULT_IS_ACTIVE,
            created_at: None,
        }
    }
}

/// Exported attribute set of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySnapshot {
    pub id: UniqueEntityId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Classification category.
#[derive(Debug, Clone)]
pub struct Category {
    id: UniqueEntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    pub const DEFAULT_DESCRIPTION: Option<String> = None;
    pub const DEFAULT_IS_ACTIVE: bool = true;

    /// Creates a validated category with a generated id.
    ///
    /// # Errors
    /// - Returns `EntityValidationError` with every failing field.
    pub fn new(props: CategoryProps) -> Result<Self, EntityValidationError> {
        Self::with_id(UniqueEntityId::new(), props)
    }

    /// Creates a validated category with a caller-provided id.
    ///
    /// Used when identity already exists externally (imports, fixtures).
    pub fn with_id(
        id: UniqueEntityId,
        props: CategoryProps,
    ) -> Result<Self, EntityValidationError> {
        let category = Self {
            id,
            name: props.name,
            description: props.description,
            is_active: props.is_active,
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        category.validate()?;
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces name and description.
    ///
    /// The candidate values are validated before assignment, so a failed
    /// update leaves the category untouched.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let mut candidate = self.snapshot();
        candidate.name = name.into();
        candidate.description = description;
        check(&candidate)?;

        self.name = candidate.name;
        self.description = candidate.description;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Re-validates the current attribute set.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        check(&self.snapshot())
    }
}

impl Entity for Category {
    type Snapshot = CategorySnapshot;

    fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.id
    }

    fn snapshot(&self) -> CategorySnapshot {
        CategorySnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

fn check(candidate: &CategorySnapshot) -> Result<(), EntityValidationError> {
    let mut validator = CategoryValidator::default();
    if validator.validate(candidate) {
        return Ok(());
    }
    Err(EntityValidationError::new(
        validator.errors.unwrap_or_default(),
    ))
}

/// Field validator for category snapshots.
#[derive(Debug, Default)]
pub struct CategoryValidator {
    errors: Option<ErrorFields>,
    validated_data: Option<CategorySnapshot>,
}

impl ValidatorFields<CategorySnapshot> for CategoryValidator {
    fn validate(&mut self, data: &CategorySnapshot) -> bool {
        let mut errors = ErrorFields::new();

        let name = data.name.trim();
        if name.is_empty() {
            push_field_error(&mut errors, "name", BLANK_MESSAGE);
        } else if name.chars().count() > NAME_MAX_LENGTH {
            push_field_error(
                &mut errors,
                "name",
                format!("Ensure this field has no more than {NAME_MAX_LENGTH} characters."),
            );
        }

        if errors.is_empty() {
            self.errors = None;
            self.validated_data = Some(data.clone());
            true
        } else {
            self.errors = Some(errors);
            self.validated_data = None;
            false
        }
    }

    fn errors(&self) -> Option<&ErrorFields> {
        self.errors.as_ref()
    }

    fn validated_data(&self) -> Option<&CategorySnapshot> {
        self.validated_data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryProps, CategoryValidator, NAME_MAX_LENGTH};
    use crate::model::entity::Entity;
    use crate::model::validation::ValidatorFields;

    #[test]
    fn validator_reports_blank_name() {
        let category = Category::new(CategoryProps::new("Movie")).expect("valid category");
        let mut candidate = category.snapshot();
        candidate.name = "   ".to_string();

        let mut validator = CategoryValidator::default();
        assert!(!validator.validate(&candidate));
        let errors = validator.errors().expect("errors should be set");
        assert_eq!(errors["name"], vec!["This field may not be blank."]);
        assert!(validator.validated_data().is_none());
    }

    #[test]
    fn validator_keeps_validated_snapshot_on_success() {
        let category = Category::new(CategoryProps::new("Movie")).expect("valid category");
        let mut validator = CategoryValidator::default();
        assert!(validator.validate(&category.snapshot()));
        assert!(validator.errors().is_none());
        assert_eq!(
            validator.validated_data().map(|data| data.name.as_str()),
            Some("Movie")
        );
    }

    #[test]
    fn name_at_limit_is_accepted() {
        let name = "t".repeat(NAME_MAX_LENGTH);
        assert!(Category::new(CategoryProps::new(name)).is_ok());
    }

    #[test]
    fn failed_update_leaves_category_untouched() {
        let mut category = Category::new(CategoryProps {
            description: Some("kept".to_string()),
            ..CategoryProps::new("Movie")
        })
        .expect("valid category");

        category
            .update("", Some("replaced".to_string()))
            .expect_err("blank name must fail");
        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), Some("kept"));
    }
}
