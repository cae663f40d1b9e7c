//! Author model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{trimmed, Entity};
use crate::query::sort::{SortKey, Sortable};

/// Fields `GET /authors` may be sorted by; the first entry is the default.
pub const AUTHOR_SORT_FIELDS: &[&str] = &["id", "name", "email"];

/// Author record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl Entity for Author {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Sortable for Author {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "name" => SortKey::text(&self.name),
            "email" => SortKey::text(&self.email),
            _ => SortKey::Number(self.id as i64),
        }
    }
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Name is required and must be at most 100 characters"))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 150, message = "Email must be at most 150 characters")
    )]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 500, message = "Bio is required and must be at most 500 characters"))]
    pub bio: String,
}

/// Update author request. Updates replace name, email and bio as a whole.
pub type UpdateAuthor = CreateAuthor;

impl CreateAuthor {
    pub fn into_author(self, id: i32) -> Author {
        Author {
            id,
            name: self.name,
            email: self.email,
            bio: self.bio,
        }
    }
}
