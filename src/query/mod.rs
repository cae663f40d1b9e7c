//! Query-processing pipeline: raw query strings are parsed into typed
//! directives, then applied in a fixed order (filter or search, sort, paginate)
//! over a snapshot of the store.

pub mod filter;
pub mod paginate;
pub mod params;
pub mod search;
pub mod sort;

pub use filter::filter_books;
pub use paginate::{paginate, Page, PaginationMeta};
pub use params::{
    parse_book_filters, parse_pagination, parse_search, parse_sort, BookFilterParams,
    PaginationParams, QueryMap, SearchField, SearchParams, SortOrder, SortParams,
};
pub use search::search_books;
pub use sort::{sort_records, SortKey, Sortable};
