use uuid::Uuid;

use hatsuon::models::{Collection, CreateCollection, CreateUser, User};
use hatsuon::repositories::{CollectionRepository, UserRepository};
use hatsuon::state::AppState;

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test user with a unique username
    pub async fn create_user(&self) -> User {
        let unique_id = Uuid::new_v4();
        let input = CreateUser {
            username: format!("user-{}", unique_id),
            email: format!("test-{}@example.com", unique_id),
        };

        UserRepository::create(&self.state.db, &input).await.unwrap()
    }

    /// Create a test collection
    pub async fn create_collection(&self, owner_id: i32) -> Collection {
        self.create_collection_with_title(owner_id, &format!("Test Collection {}", Uuid::new_v4()))
            .await
    }

    /// Create a test collection with specific title
    pub async fn create_collection_with_title(&self, owner_id: i32, title: &str) -> Collection {
        let input = CreateCollection {
            title: title.to_string(),
            description: "Test collection description".to_string(),
        };

        CollectionRepository::create(&self.state.db, owner_id, &input)
            .await
            .unwrap()
    }
}
