//! Sort spec parsing and stable in-place sorting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::record::ContentRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Parsed `"field[:asc|desc]"` sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: Direction,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }

    /// Parse `"field"`, `"field:asc"` or `"field:desc"`.
    ///
    /// Returns `None` for an empty field so callers fall back to the
    /// collection default. An unrecognized direction token falls back to
    /// ascending rather than erroring.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(2, ':');
        let field = parts.next()?.trim();
        if field.is_empty() {
            return None;
        }

        let direction = match parts.next().map(str::trim) {
            Some("desc") => Direction::Desc,
            _ => Direction::Asc,
        };

        Some(Self::new(field, direction))
    }
}

/// Stable in-place sort by the spec's field.
///
/// Records without a value for the field sort after those with one, and a
/// field no record knows leaves the input order untouched - `sort_by` is
/// stable, so equal keys always keep their relative input order.
pub fn sort<T: ContentRecord>(items: &mut [T], spec: &SortSpec) {
    items.sort_by(|a, b| {
        match (a.sort_key(&spec.field), b.sort_key(&spec.field)) {
            (Some(ka), Some(kb)) => {
                let ord = ka.cmp(&kb);
                match spec.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
