//! Windowing over a filtered collection plus pagination metadata.

use serde::{Deserialize, Serialize};

/// Metadata describing a windowed view over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
}

/// One page of results with its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice `[(page-1)*page_size, page*page_size)` clamped to the collection.
///
/// Out-of-range pages yield an empty slice with correct metadata; they are
/// not an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Paged<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let total = items.len();
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Paged {
        items: items[start..end].to_vec(),
        pagination: Pagination {
            page,
            page_size,
            page_count: total.div_ceil(page_size),
            total,
        },
    }
}
