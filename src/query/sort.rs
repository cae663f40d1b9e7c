//! Stable, non-mutating sort over allow-listed fields

use super::params::{SortOrder, SortParams};

/// Comparable value extracted from a record for one sort field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(i64),
    /// Lower-cased text
    Text(String),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }
}

/// Records that can be ordered by a named field.
pub trait Sortable {
    /// Unknown field names fall back to the record id.
    fn sort_key(&self, field: &str) -> SortKey;
}

/// Returns a sorted copy of `records`.
///
/// Descending order inverts the comparison rather than the output, so records
/// with equal keys keep their original relative order in both directions.
pub fn sort_records<T: Sortable + Clone>(records: &[T], params: &SortParams) -> Vec<T> {
    let mut keyed: Vec<(SortKey, &T)> = records
        .iter()
        .map(|r| (r.sort_key(&params.sort_by), r))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.cmp(b);
        match params.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}
