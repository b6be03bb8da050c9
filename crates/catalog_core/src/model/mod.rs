//! Catalog domain model.
//!
//! # Responsibility
//! - Define identity primitives and the entity contract used by repositories.
//! - Define concrete entities and their field validation.
//!
//! # Invariants
//! - Every entity is identified by a stable `UniqueEntityId`.
//! - Entities are valid after construction and after every named mutation.

pub mod category;
pub mod entity;
pub mod validation;
