//! Book model and related types

use std::borrow::Cow;

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{trimmed, Entity};
use crate::query::sort::{SortKey, Sortable};

/// Fields book listings may be sorted by; the first entry is the default.
pub const BOOK_SORT_FIELDS: &[&str] = &["id", "title", "isbn", "publishedYear", "authorId"];

/// Earliest accepted publication year
pub const MIN_PUBLISHED_YEAR: i32 = 1000;

/// Digits and hyphens only, starting with a digit and ending with a digit or X.
static ISBN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9](?:-?[0-9])*(?:-?[0-9Xx])$").expect("valid ISBN regex"));

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub isbn: String,
    pub published_year: i32,
    pub author_id: i32,
}

impl Entity for Book {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Sortable for Book {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "title" => SortKey::text(&self.title),
            "isbn" => SortKey::text(&self.isbn),
            "publishedYear" => SortKey::Number(self.published_year as i64),
            "authorId" => SortKey::Number(self.author_id as i64),
            _ => SortKey::Number(self.id as i64),
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Title is required and must be at most 200 characters"))]
    pub title: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 20, message = "ISBN is required and must be at most 20 characters"),
        custom(function = "validate_isbn")
    )]
    pub isbn: String,
    #[validate(custom(function = "validate_published_year"))]
    pub published_year: i32,
    #[validate(range(min = 1, message = "Author id must be a positive integer"))]
    pub author_id: i32,
}

/// Update book request. Updates replace every field but the id.
pub type UpdateBook = CreateBook;

impl CreateBook {
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            isbn: self.isbn,
            published_year: self.published_year,
            author_id: self.author_id,
        }
    }
}

/// ISBN-10 or ISBN-13 syntax, hyphens allowed between digits. Checksums are not verified.
pub fn is_valid_isbn(isbn: &str) -> bool {
    if !ISBN_SHAPE.is_match(isbn) {
        return false;
    }
    let digits: String = isbn.chars().filter(|c| *c != '-').collect();
    match digits.len() {
        10 => true,
        13 => digits.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

// Empty ISBNs are already reported by the length rule.
fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    if isbn.is_empty() || is_valid_isbn(isbn) {
        return Ok(());
    }
    let mut err = ValidationError::new("isbn");
    err.message = Some(Cow::from("Invalid ISBN format"));
    Err(err)
}

/// The upper bound moves with the calendar, so it cannot be a `range` attribute.
fn validate_published_year(year: i32) -> Result<(), ValidationError> {
    let max_year = current_year();
    if (MIN_PUBLISHED_YEAR..=max_year).contains(&year) {
        return Ok(());
    }
    let mut err = ValidationError::new("range");
    err.message = Some(Cow::from(format!(
        "Published year must be between {} and {}",
        MIN_PUBLISHED_YEAR, max_year
    )));
    Err(err)
}
