//! Read-only access to the Anki collection.

pub mod collection;
pub mod error;

pub use collection::AnkiCollection;
pub use error::DbError;
