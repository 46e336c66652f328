//! DTOs for the link CRUD endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, LinkPatch, NewLink};

/// Request body for `POST /links/`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Destination URL. Must carry a scheme and a host.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Display name for the link.
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl From<CreateLinkRequest> for NewLink {
    fn from(request: CreateLinkRequest) -> Self {
        NewLink {
            url: request.url,
            name: request.name,
        }
    }
}

/// Request body for `PUT /links/{id}`.
///
/// All fields are optional — only provided, non-null fields are changed.
/// `null` and an absent field are equivalent: both leave the stored value
/// unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New destination URL for this link.
    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,

    /// New display name for this link.
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
}

impl UpdateLinkRequest {
    /// Converts the request into the partial-fields shape the gateway applies.
    pub fn into_patch(self) -> LinkPatch {
        LinkPatch {
            url: self.url,
            name: self.name,
        }
    }
}

/// JSON representation of a stored link: `{"id", "url", "name"}`, no wrapper.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub url: String,
    pub name: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            name: link.name,
        }
    }
}

/// Plain confirmation body used by the welcome and delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
