//! Query parameter parsing.
//!
//! Malformed pagination, sort and filter values never fail a request: they fall
//! back to defaults or are dropped. Only a missing search query is an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Raw query string as received by a handler
pub type QueryMap = HashMap<String, String>;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationParams {
    pub page: usize,
    pub limit: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SortParams {
    pub sort_by: String,
    pub sort_order: SortOrder,
}

/// Optional book filters; absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookFilterParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year_to: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Isbn,
    Author,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Isbn, SearchField::Author];

    fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(SearchField::Title),
            "isbn" => Some(SearchField::Isbn),
            "author" => Some(SearchField::Author),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchParams {
    pub query: String,
    pub fields: Vec<SearchField>,
}

fn parse_int(query: &QueryMap, key: &str) -> Option<i64> {
    query.get(key).and_then(|v| v.trim().parse::<i64>().ok())
}

fn parse_text(query: &QueryMap, key: &str) -> Option<String> {
    query
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `page` is clamped to at least 1 and `limit` to `1..=100`; non-numeric values use the defaults.
pub fn parse_pagination(query: &QueryMap) -> PaginationParams {
    let page = parse_int(query, "page")
        .map(|p| p.max(1) as usize)
        .unwrap_or(DEFAULT_PAGE);
    let limit = parse_int(query, "limit")
        .map(|l| l.clamp(1, MAX_LIMIT as i64) as usize)
        .unwrap_or(DEFAULT_LIMIT);
    PaginationParams { page, limit }
}

/// `sortBy` must appear in `allowed`, otherwise the first allowed field is used.
/// Only the exact value `desc` selects descending order.
pub fn parse_sort(query: &QueryMap, allowed: &[&str]) -> SortParams {
    let default_field = allowed.first().copied().unwrap_or("id");
    let sort_by = query
        .get("sortBy")
        .map(String::as_str)
        .filter(|field| allowed.contains(field))
        .unwrap_or(default_field)
        .to_string();
    let sort_order = match query.get("sortOrder").map(String::as_str) {
        Some("desc") => SortOrder::Desc,
        _ => SortOrder::Asc,
    };
    SortParams {
        sort_by,
        sort_order,
    }
}

pub fn parse_book_filters(query: &QueryMap) -> BookFilterParams {
    let int = |key: &str| parse_int(query, key).and_then(|v| i32::try_from(v).ok());
    BookFilterParams {
        author_id: int("authorId"),
        published_year: int("publishedYear"),
        published_year_from: int("publishedYearFrom"),
        published_year_to: int("publishedYearTo"),
        title: parse_text(query, "title"),
        isbn: parse_text(query, "isbn"),
    }
}

/// `query` is required. `fields` is a comma separated subset of `title,isbn,author`;
/// unknown names are dropped and an empty selection means every field.
pub fn parse_search(query: &QueryMap) -> AppResult<SearchParams> {
    let text = parse_text(query, "query")
        .ok_or_else(|| AppError::Validation("Search query is required".to_string()))?;

    let mut fields: Vec<SearchField> = Vec::new();
    if let Some(raw) = query.get("fields") {
        for field in raw.split(',').filter_map(|f| SearchField::parse(f.trim())) {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
    }
    if fields.is_empty() {
        fields = SearchField::ALL.to_vec();
    }

    Ok(SearchParams {
        query: text,
        fields,
    })
}
