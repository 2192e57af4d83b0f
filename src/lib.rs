// Library crate for the hatsuon data layer
// Exports the collection schema and its repositories

pub mod config;
pub mod entity;
pub mod error;
pub mod models;
pub mod repositories;
pub mod state;

pub use error::{StoreError, StoreResult};
