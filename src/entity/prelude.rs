pub use super::collection::Entity as Collection;
pub use super::user::Entity as User;
