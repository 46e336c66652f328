//! Repository trait for link data access.

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::error::AppError;

/// Parses a path identifier into a MongoDB ObjectId.
///
/// This is the gateway's id-encoding helper: it runs before any store access
/// so that malformed identifiers never reach the driver.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when `id` is not a 24-character hex
/// ObjectId rendering.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::bad_request(format!("Invalid ObjectId: {id}")))
}

/// Repository interface for the link collection.
///
/// All identifiers are pre-parsed [`ObjectId`] values; callers convert path
/// strings with [`parse_object_id`] first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoLinkRepository`] - MongoDB implementation
/// - Mock available via `mockall` for unit tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link document and returns the store-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the write fails.
    async fn insert(&self, new_link: NewLink) -> Result<ObjectId, AppError>;

    /// Finds a link by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if a document with this id exists
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on driver errors.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Link>, AppError>;

    /// Returns every link in the collection, unfiltered and unpaginated,
    /// in store-native order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on driver errors.
    async fn find_all(&self) -> Result<Vec<Link>, AppError>;

    /// Applies the fields present in `patch` to the document with this id.
    ///
    /// Returns the number of documents actually modified. An empty patch is
    /// a no-op returning 0 without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on driver errors.
    async fn update_fields(&self, id: ObjectId, patch: LinkPatch) -> Result<u64, AppError>;

    /// Deletes the document with this id, returning the deleted count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on driver errors.
    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, AppError>;
}
