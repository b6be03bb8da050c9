//! Core use-case layer.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from entity internals via output shapes.

pub mod category_service;
pub mod dto;
pub mod use_case;
