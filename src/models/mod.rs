//! Data models for Bookshelf

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, CreateAuthor, UpdateAuthor};
pub use book::{Book, CreateBook, UpdateBook};

use serde::{Deserialize, Deserializer};

/// Deserialize a string field with surrounding whitespace removed.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Entities kept in the in-memory store are addressed by a positive integer id.
pub trait Entity: Clone {
    fn id(&self) -> i32;
}
