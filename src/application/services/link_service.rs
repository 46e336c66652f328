//! Link creation, retrieval, update, and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::{LinkRepository, parse_object_id};
use crate::error::AppError;

/// Service orchestrating link operations against the storage gateway.
///
/// Identifier parsing always happens before the repository is touched, so a
/// malformed id is rejected without any store access. Every store operation
/// is attempted at most once; there is no retry logic.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a link and returns it as persisted.
    ///
    /// The record is re-fetched after insert so the response reflects the
    /// stored document, id included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the insert did not yield a
    /// retrievable document. Returns [`AppError::Internal`] on driver errors.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let id = self.repository.insert(new_link).await?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::bad_request("Link could not be created"))
    }

    /// Retrieves a single link by its identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed id and
    /// [`AppError::NotFound`] when no document matches.
    pub async fn get_link(&self, id: &str) -> Result<Link, AppError> {
        let oid = parse_object_id(id)?;

        self.repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Link {id} not found")))
    }

    /// Lists every stored link.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.find_all().await
    }

    /// Partially updates a link and returns its current state.
    ///
    /// When the patch is non-empty and the update modified exactly one
    /// document, the record is re-fetched and returned. Otherwise the
    /// existing record is returned unchanged; an empty patch is a no-op,
    /// not an error. A concurrent delete between the update and the
    /// re-fetch shows up as 404. That race is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed id and
    /// [`AppError::NotFound`] when the document no longer exists.
    pub async fn update_link(&self, id: &str, patch: LinkPatch) -> Result<Link, AppError> {
        let oid = parse_object_id(id)?;

        if !patch.is_empty() {
            let modified = self.repository.update_fields(oid, patch).await?;

            if modified == 1
                && let Some(link) = self.repository.find_by_id(oid).await?
            {
                return Ok(link);
            }
        }

        self.repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Link {id} not found")))
    }

    /// Deletes a link after verifying it exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed id,
    /// [`AppError::NotFound`] when no document matches, and
    /// [`AppError::Internal`] on unexpected store failures.
    pub async fn delete_link(&self, id: &str) -> Result<(), AppError> {
        let oid = parse_object_id(id)?;

        if self.repository.find_by_id(oid).await?.is_none() {
            return Err(AppError::not_found(format!("Link {id} not found")));
        }

        let deleted = self.repository.delete_by_id(oid).await?;
        tracing::debug!(id, deleted, "Deleted link");

        Ok(())
    }
}
