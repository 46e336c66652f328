//! Handlers for the link CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, LinkResponse, MessageResponse, UpdateLinkRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new link.
///
/// # Endpoint
///
/// `POST /links/`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "name": "Example Site"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the insert did not yield
/// a retrievable document.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.create_link(payload.into()).await?;

    Ok(Json(link.into()))
}

/// Lists all stored links.
///
/// # Endpoint
///
/// `GET /links/`
///
/// Returns every record, unfiltered and unpaginated, in store-native order.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Fetches a single link by id.
///
/// # Endpoint
///
/// `GET /links/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed identifier and 404 Not Found
/// when no record matches.
pub async fn get_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&id).await?;

    Ok(Json(link.into()))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PUT /links/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided, non-null fields are changed;
/// an empty body is a no-op returning the record unchanged.
///
/// ```json
/// {
///   "url": "https://new-destination.com",
///   "name": "New Name"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed identifier or invalid field
/// values, and 404 Not Found when the record no longer exists.
pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .update_link(&id, payload.into_patch())
        .await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{id}`
///
/// Existence is verified before the delete, so a repeat delete reports 404.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed identifier, 404 Not Found when
/// no record matches, and 500 when the store fails mid-sequence.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete_link(&id).await?;

    Ok(Json(MessageResponse {
        message: format!("Link with ID {id} deleted successfully"),
    }))
}
