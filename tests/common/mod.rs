#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use bson::oid::ObjectId;

use linkbook::application::services::LinkService;
use linkbook::domain::entities::{Link, LinkPatch, NewLink};
use linkbook::domain::repositories::LinkRepository;
use linkbook::error::AppError;
use linkbook::routes::app_router;
use linkbook::state::AppState;

// The lib gates its automock behind cfg(test), which is invisible to
// integration tests; declare the mock against the public trait instead.
mockall::mock! {
    pub LinkRepo {}

    #[async_trait]
    impl LinkRepository for LinkRepo {
        async fn insert(&self, new_link: NewLink) -> Result<ObjectId, AppError>;
        async fn find_by_id(&self, id: ObjectId) -> Result<Option<Link>, AppError>;
        async fn find_all(&self) -> Result<Vec<Link>, AppError>;
        async fn update_fields(&self, id: ObjectId, patch: LinkPatch) -> Result<u64, AppError>;
        async fn delete_by_id(&self, id: ObjectId) -> Result<u64, AppError>;
    }
}

/// A well-formed id that the mock store treats as present.
pub const EXISTING_ID: &str = "507f1f77bcf86cd799439011";

/// A well-formed id with no matching document.
pub const MISSING_ID: &str = "507f1f77bcf86cd799439012";

pub fn existing_oid() -> ObjectId {
    ObjectId::parse_str(EXISTING_ID).unwrap()
}

pub fn test_link(id: &str, url: &str, name: &str) -> Link {
    Link::new(id.to_string(), url.to_string(), name.to_string())
}

/// Builds a test server over the full application router, backed by the
/// given mock repository.
pub fn make_server(repository: MockLinkRepo) -> TestServer {
    let link_service = Arc::new(LinkService::new(Arc::new(repository)));
    let state = AppState::new(link_service);
    TestServer::new(app_router(state)).unwrap()
}
