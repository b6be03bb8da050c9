//! Search request/response types shared by searchable repositories.
//!
//! # Responsibility
//! - Normalize paging, sort and filter input.
//! - Define the paginated result envelope.

pub mod params;
pub mod result;
