//! Success envelope shared by every endpoint

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::query::{BookFilterParams, Page, PaginationMeta, SearchParams, SortParams};

/// `{ success: true, message?, data, pagination?, sort?, filters?, search? }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<BookFilterParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchParams>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            pagination: None,
            sort: None,
            filters: None,
            search: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_sort(mut self, sort: SortParams) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_filters(mut self, filters: BookFilterParams) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_search(mut self, search: SearchParams) -> Self {
        self.search = Some(search);
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn page(page: Page<T>) -> Self {
        let mut response = Self::new(page.data);
        response.pagination = Some(page.pagination);
        response
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
