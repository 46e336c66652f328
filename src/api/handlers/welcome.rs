//! Handler for the root welcome endpoint.

use axum::Json;

use crate::api::dto::link::MessageResponse;

/// Returns a static welcome message.
///
/// # Endpoint
///
/// `GET /`
pub async fn welcome_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Link API".to_string(),
    })
}
