pub mod collection;
pub mod user;

pub mod prelude;

pub use prelude::*;
