//! Repository trait definitions for the domain layer.
//!
//! The repository trait abstracts data access following the Repository
//! pattern and is implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for store operations
//! - The MongoDB implementation lives in `crate::infrastructure::persistence`
//! - A mock implementation is auto-generated via `mockall` for testing

pub mod link_repository;

pub use link_repository::{LinkRepository, parse_object_id};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
