//! Typed filter predicates over a collection.

use serde::{Deserialize, Serialize};

use super::record::ContentRecord;

/// The filterable fields of a list query.
///
/// Every field is optional; a filter a record kind does not carry (e.g.
/// `category` on game updates) passes instead of erroring, matching the
/// "unrecognized keys are ignored" contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Exact match on the record's status label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Category slug or id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Author id, or case-insensitive substring of the author name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Case-insensitive substring over the record's search haystack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.search.is_none()
    }
}

/// Keep the items matching every present filter. Never mutates the input.
pub fn filter<T: ContentRecord + Clone>(items: &[T], filters: &Filters) -> Vec<T> {
    if filters.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| matches(*item, filters))
        .cloned()
        .collect()
}

fn matches<T: ContentRecord>(item: &T, filters: &Filters) -> bool {
    if let Some(status) = &filters.status {
        if let Some(label) = item.status_label() {
            if label != status {
                return false;
            }
        }
    }

    if let Some(category) = &filters.category {
        if let Some(cat) = item.category() {
            if cat.slug != *category && cat.id != *category {
                return false;
            }
        }
    }

    if let Some(author) = &filters.author {
        if let Some(a) = item.author() {
            let by_name = a.name.to_lowercase().contains(&author.to_lowercase());
            if a.id != *author && !by_name {
                return false;
            }
        }
    }

    if let Some(term) = &filters.search {
        let term = term.to_lowercase();
        let hit = item
            .search_haystack()
            .iter()
            .any(|text| text.to_lowercase().contains(&term));
        if !hit {
            return false;
        }
    }

    true
}
