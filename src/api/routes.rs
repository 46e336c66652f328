//! Link resource route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get, routing::post};

/// Routes for the `/links` resource.
///
/// # Endpoints
///
/// - `POST   /links/`     - Create a link
/// - `GET    /links/`     - List all links
/// - `GET    /links/{id}` - Fetch a single link
/// - `PUT    /links/{id}` - Partially update a link
/// - `DELETE /links/{id}` - Delete a link
///
/// The trailing slash on the collection routes is part of the contract:
/// `/links` without it does not match.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links/", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
