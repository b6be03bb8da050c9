//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define entity CRUD and search contracts.
//! - Provide the generic filter/sort/paginate engine over an in-memory store.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `Validation`).
//! - Search runs filter, then sort, then pagination, in that order.

pub mod category_repo;
pub mod memory;
pub mod repository;
