//! Entity identity primitives.
//!
//! # Responsibility
//! - Define the stable identifier shared by every catalog entity.
//! - Define the `Entity` contract consumed by generic repositories.
//!
//! # Invariants
//! - `UniqueEntityId` always holds a canonical hyphenated lowercase UUID.
//! - An entity's identifier never changes after construction.
//! - Entity equality is identity-based, never structural.

use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Raised when a caller-provided identifier is not a UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUuidError {
    value: String,
}

impl InvalidUuidError {
    /// Returns the rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for InvalidUuidError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID must be a valid UUID, got `{}`", self.value)
    }
}

impl Error for InvalidUuidError {}

/// Stable string identifier for catalog entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueEntityId(String);

impl UniqueEntityId {
    /// Generates a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses an externally supplied identifier.
    ///
    /// Accepts every textual form understood by `uuid` and stores the
    /// canonical hyphenated lowercase form.
    ///
    /// # Errors
    /// - Returns `InvalidUuidError` when `value` is not a UUID.
    pub fn parse(value: &str) -> Result<Self, InvalidUuidError> {
        Uuid::parse_str(value.trim())
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| InvalidUuidError {
                value: value.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UniqueEntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UniqueEntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for UniqueEntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Contract for identity-bearing domain objects stored by repositories.
///
/// Implementors keep their attributes private and expose mutation only
/// through named domain operations.
pub trait Entity: Clone {
    /// Plain exported record holding `id` plus every attribute.
    type Snapshot: Serialize;

    fn unique_entity_id(&self) -> &UniqueEntityId;

    /// Exports the current attribute set.
    fn snapshot(&self) -> Self::Snapshot;

    /// Identifier as a string slice.
    fn id(&self) -> &str {
        self.unique_entity_id().as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueEntityId;

    #[test]
    fn new_generates_distinct_uuid_values() {
        let first = UniqueEntityId::new();
        let second = UniqueEntityId::new();
        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 36);
    }

    #[test]
    fn parse_accepts_valid_uuid_and_canonicalizes() {
        let id = UniqueEntityId::parse("0F42AC99-08B0-4FEF-923D-9187B3762A0D")
            .expect("uppercase uuid should parse");
        assert_eq!(id.as_str(), "0f42ac99-08b0-4fef-923d-9187b3762a0d");
    }

    #[test]
    fn parse_rejects_non_uuid_text() {
        let err = UniqueEntityId::parse("fake id").expect_err("fake id must be rejected");
        assert_eq!(err.value(), "fake id");
        assert!(err.to_string().contains("valid UUID"));
    }
}
