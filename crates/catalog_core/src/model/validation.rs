//! Field validation contracts shared by entities.
//!
//! # Responsibility
//! - Define the field-error map reported by entity validators.
//! - Provide single-value rules for ad-hoc checks.
//!
//! # Invariants
//! - A failed validation reports every failing field, not only the first.
//! - Messages for one field keep the order in which rules fired.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field name -> ordered error messages.
pub type ErrorFields = BTreeMap<String, Vec<String>>;

/// Validator over a candidate snapshot of type `P`.
///
/// After `validate` returns `false`, `errors()` holds the full field map.
/// After it returns `true`, `validated_data()` holds the accepted snapshot.
pub trait ValidatorFields<P> {
    fn validate(&mut self, data: &P) -> bool;
    fn errors(&self) -> Option<&ErrorFields>;
    fn validated_data(&self) -> Option<&P>;
}

/// Entity construction or mutation produced invalid field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityValidationError {
    errors: ErrorFields,
}

impl EntityValidationError {
    pub fn new(errors: ErrorFields) -> Self {
        Self { errors }
    }

    /// Full field -> messages map.
    pub fn errors(&self) -> &ErrorFields {
        &self.errors
    }

    /// Messages reported for one field, empty when the field is valid.
    pub fn field(&self, name: &str) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields = self.errors.keys().cloned().collect::<Vec<_>>().join(", ");
        write!(f, "entity validation error: invalid fields [{fields}]")
    }
}

impl Error for EntityValidationError {}

/// Single rule failure raised by `ValidatorRules`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(String);

impl ValidationError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for ValidationError {}

/// Fluent rule chain over one optional text value.
///
/// Meant for callers checking their own input before building an entity.
/// Entity validators report field maps through `ValidatorFields` instead and
/// do not go through these rules.
///
/// ```
/// use catalog_core::ValidatorRules;
///
/// let checked = ValidatorRules::values(Some("Movie"), "name")
///     .required()
///     .and_then(|rules| rules.max_length(255));
/// assert!(checked.is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValidatorRules<'a> {
    value: Option<&'a str>,
    prop: &'a str,
}

impl<'a> ValidatorRules<'a> {
    pub fn values(value: Option<&'a str>, prop: &'a str) -> Self {
        Self { value, prop }
    }

    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    pub fn prop(&self) -> &'a str {
        self.prop
    }

    /// Fails on a missing or empty value.
    pub fn required(self) -> Result<Self, ValidationError> {
        match self.value {
            Some(value) if !value.is_empty() => Ok(self),
            _ => Err(ValidationError(format!("The {} is required", self.prop))),
        }
    }

    /// Fails when the value is longer than `max_length` characters.
    ///
    /// Missing values pass; combine with `required` to reject them.
    pub fn max_length(self, max_length: usize) -> Result<Self, ValidationError> {
        match self.value {
            Some(value) if value.chars().count() > max_length => Err(ValidationError(format!(
                "The {} must be less than {max_length} characters",
                self.prop
            ))),
            _ => Ok(self),
        }
    }
}

/// Appends `message` to the list kept for `field`.
pub(crate) fn push_field_error(errors: &mut ErrorFields, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}

#[cfg(test)]
mod tests {
    use super::{push_field_error, EntityValidationError, ErrorFields, ValidatorRules};

    #[test]
    fn required_rejects_missing_and_empty_values() {
        for value in [None, Some("")] {
            let err = ValidatorRules::values(value, "prop")
                .required()
                .expect_err("missing value must fail");
            assert_eq!(err.message(), "The prop is required");
        }

        for value in ["test", "5", "0", "False"] {
            assert!(ValidatorRules::values(Some(value), "prop").required().is_ok());
        }
    }

    #[test]
    fn max_length_counts_characters_and_skips_missing_values() {
        assert!(ValidatorRules::values(Some("tttt"), "prop")
            .max_length(4)
            .is_ok());
        assert!(ValidatorRules::values(None, "prop").max_length(1).is_ok());
        assert!(ValidatorRules::values(Some("éééé"), "prop")
            .max_length(4)
            .is_ok());

        let err = ValidatorRules::values(Some("ttttt"), "prop")
            .max_length(4)
            .expect_err("five chars exceed four");
        assert_eq!(err.message(), "The prop must be less than 4 characters");
    }

    #[test]
    fn rules_chain_stops_at_first_failure() {
        let err = ValidatorRules::values(Some(""), "name")
            .required()
            .and_then(|rules| rules.max_length(1))
            .expect_err("empty value fails required first");
        assert_eq!(err.message(), "The name is required");
    }

    #[test]
    fn entity_validation_error_keeps_every_field() {
        let mut errors = ErrorFields::new();
        push_field_error(&mut errors, "name", "first");
        push_field_error(&mut errors, "name", "second");
        push_field_error(&mut errors, "description", "third");

        let err = EntityValidationError::new(errors);
        assert_eq!(err.field("name"), ["first", "second"]);
        assert_eq!(err.field("description"), ["third"]);
        assert!(err.field("is_active").is_empty());
        assert!(err.to_string().contains("description, name"));
    }
}
