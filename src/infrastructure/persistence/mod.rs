//! MongoDB repository implementations.
//!
//! Concrete implementations of domain repository traits using the official
//! MongoDB driver with typed collections.
//!
//! # Repositories
//!
//! - [`MongoLinkRepository`] - Link storage and retrieval

pub mod mongo_link_repository;

pub use mongo_link_repository::{DATABASE_NAME, LINK_COLLECTION, MongoLinkRepository};
