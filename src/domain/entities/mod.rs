//! Core domain entities representing the business data model.
//!
//! This module contains the data structures that represent the sole concept
//! of the service: a stored link. Entities are plain data structures without
//! business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored link in its transport shape
//! - [`NewLink`] - Input data for creating a link
//! - [`LinkPatch`] - Partial update where `None` fields are left unchanged

pub mod link;

pub use link::{Link, LinkPatch, NewLink};
