use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A stored collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i32,
    pub uuid: Uuid,
    pub created_date: OffsetDateTime,
    pub title: String,
    pub description: String,
    pub created_by: i32,
}

/// In-memory collection that may not have been persisted yet.
///
/// `id` is `None` until the row exists. `uuid` may be supplied by the caller;
/// otherwise one is generated on insert. `created_by` is optional here only so
/// that a missing owner reaches the database and is rejected there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDraft {
    pub id: Option<i32>,
    pub uuid: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub created_by: Option<i32>,
}

impl CollectionDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, owner_id: i32) -> Self {
        Self {
            id: None,
            uuid: None,
            title: title.into(),
            description: description.into(),
            created_by: Some(owner_id),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl From<Collection> for CollectionDraft {
    fn from(c: Collection) -> Self {
        Self {
            id: Some(c.id),
            uuid: Some(c.uuid),
            title: c.title,
            description: c.description,
            created_by: Some(c.created_by),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCollection {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCollection {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateCollection {
    /// Overwrite the draft's mutable fields with the ones present here
    pub fn apply(&self, draft: &mut CollectionDraft) {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
    }
}
