pub mod collection;
pub mod user;

pub use collection::*;
pub use user::*;
