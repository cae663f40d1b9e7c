//! Page slicing and page metadata

use serde::Serialize;
use utoipa::ToSchema;

use super::params::PaginationParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    /// Number of records before slicing
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of records
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Slices `records` to the requested page. A page past the end is empty but
/// still reports the real totals.
pub fn paginate<T>(records: Vec<T>, params: PaginationParams) -> Page<T> {
    let total = records.len();
    let limit = params.limit.max(1);
    let page = params.page.max(1);
    let total_pages = total.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);

    let data: Vec<T> = records.into_iter().skip(start).take(limit).collect();

    Page {
        data,
        pagination: PaginationMeta {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}
