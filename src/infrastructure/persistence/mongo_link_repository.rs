//! MongoDB implementation of the link repository.

use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use futures_util::TryStreamExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Database name. Fixed by contract, not configurable.
pub const DATABASE_NAME: &str = "link_db";

/// Collection name within [`DATABASE_NAME`].
pub const LINK_COLLECTION: &str = "links";

/// Native document shape of a link in the `links` collection.
///
/// `_id` is absent on insert so the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub url: String,
    pub name: String,
}

/// Converts a stored document into the transport shape.
///
/// Rendering the ObjectId to its 24-character hex string is the only
/// non-trivial step; `url` and `name` pass through unchanged.
pub fn to_link(document: LinkDocument) -> Link {
    Link::new(
        document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
        document.url,
        document.name,
    )
}

/// MongoDB repository for the link collection.
///
/// Owns the typed collection handle; connection pooling belongs to the
/// driver's `Client`.
pub struct MongoLinkRepository {
    collection: Collection<LinkDocument>,
}

impl MongoLinkRepository {
    /// Creates a repository bound to the `links` collection of `link_db`.
    pub fn new(client: &Client) -> Self {
        Self {
            collection: client
                .database(DATABASE_NAME)
                .collection::<LinkDocument>(LINK_COLLECTION),
        }
    }
}

#[async_trait]
impl LinkRepository for MongoLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<ObjectId, AppError> {
        let document = LinkDocument {
            id: None,
            url: new_link.url,
            name: new_link.name,
        };

        let result = self.collection.insert_one(document).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::internal("Internal server error: missing inserted id"))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Link>, AppError> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(document.map(to_link))
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<LinkDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(to_link).collect())
    }

    async fn update_fields(&self, id: ObjectId, patch: LinkPatch) -> Result<u64, AppError> {
        let mut fields = Document::new();
        if let Some(url) = patch.url {
            fields.insert("url", url);
        }
        if let Some(name) = patch.name {
            fields.insert("name", name);
        }

        if fields.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;

        Ok(result.modified_count)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count)
    }
}
