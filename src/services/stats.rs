//! Statistics service

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{Author, Book},
    repository::Repository,
};

/// Catalog statistics, always computed over the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    pub total_books: usize,
    pub total_authors: usize,
    /// Book count per publication year, ascending by year
    #[schema(value_type = Object)]
    pub books_by_year: BTreeMap<i32, usize>,
    /// Book count per author, in order of first appearance
    pub books_by_author: Vec<AuthorBookCount>,
    pub published_year_range: YearRange,
    /// Mean publication year rounded to the nearest integer, 0 when there are no books
    pub average_published_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBookCount {
    pub author_id: i32,
    pub author_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct YearRange {
    pub earliest: i32,
    pub latest: i32,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_stats(&self) -> BookStats {
        let store = self.repository.read().await;
        compute_stats(store.books.all(), store.authors.all())
    }
}

/// Books whose author no longer exists are left out of `books_by_author`
/// but still count everywhere else.
pub fn compute_stats(books: &[Book], authors: &[Author]) -> BookStats {
    let mut books_by_year: BTreeMap<i32, usize> = BTreeMap::new();
    let mut by_author: IndexMap<i32, AuthorBookCount> = IndexMap::new();

    for book in books {
        *books_by_year.entry(book.published_year).or_insert(0) += 1;

        if let Some(entry) = by_author.get_mut(&book.author_id) {
            entry.count += 1;
        } else if let Some(author) = authors.iter().find(|a| a.id == book.author_id) {
            by_author.insert(
                author.id,
                AuthorBookCount {
                    author_id: author.id,
                    author_name: author.name.clone(),
                    count: 1,
                },
            );
        }
    }

    let published_year_range = YearRange {
        earliest: books.iter().map(|b| b.published_year).min().unwrap_or(0),
        latest: books.iter().map(|b| b.published_year).max().unwrap_or(0),
    };

    let average_published_year = if books.is_empty() {
        0
    } else {
        let sum: i64 = books.iter().map(|b| b.published_year as i64).sum();
        (sum as f64 / books.len() as f64).round() as i32
    };

    BookStats {
        total_books: books.len(),
        total_authors: authors.len(),
        books_by_year,
        books_by_author: by_author.into_values().collect(),
        published_year_range,
        average_published_year,
    }
}
