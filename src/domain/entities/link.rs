//! Link entity representing a stored bookmark.

/// A stored link in its transport shape.
///
/// `id` is the hex rendering of the MongoDB ObjectId assigned on insert.
/// It never changes after creation.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub name: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: String, url: String, name: String) -> Self {
        Self { id, url, name }
    }
}

/// Input data for creating a new link.
///
/// The identifier is absent on purpose: it is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: String,
    pub name: String,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged. A JSON `null` and an absent field are
/// equivalent: both leave the stored value as-is.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl LinkPatch {
    /// Returns true when the patch carries no fields to change.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.name.is_none()
    }
}
