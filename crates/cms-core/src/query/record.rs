//! Typed field access for content records.
//!
//! The pipeline never does stringly property lookup on serialized values.
//! Each entity maps the field names it supports to a typed [`SortKey`] and
//! exposes the handful of embedded records filters can match against.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::domain::{Author, Category};

/// A typed, comparable projection of one record field.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Timestamps (`publishedAt`, `releaseDate`, ...).
    Time(DateTime<Utc>),
    /// Integral values (`readingTime`).
    Int(i64),
    /// Flags (`isActive`, `isHotfix`).
    Bool(bool),
    /// Everything else, compared case-insensitively.
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Time(_) => 0,
            SortKey::Int(_) => 1,
            SortKey::Bool(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Time(a), SortKey::Time(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            // Mixed-type keys only happen when a field name means different
            // things across records of one collection; order by kind so the
            // sort stays total.
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// A queryable content record.
///
/// Default implementations return "field not present"; each entity overrides
/// only what it actually carries, so unsupported filters fall through as
/// no-ops instead of erroring.
pub trait ContentRecord {
    /// Unique, URL-safe identifier within the record's collection.
    fn slug(&self) -> &str;

    /// Typed value for a sortable field name (dotted paths included),
    /// or `None` if the record has no such field.
    fn sort_key(&self, field: &str) -> Option<SortKey>;

    /// Label used for exact-match `status` filtering.
    fn status_label(&self) -> Option<&'static str> {
        None
    }

    fn category(&self) -> Option<&Category> {
        None
    }

    fn author(&self) -> Option<&Author> {
        None
    }

    /// Text fragments searched by the `search` filter. Includes tag names
    /// so a term appearing only in a tag still matches.
    fn search_haystack(&self) -> Vec<&str> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn text_keys_compare_case_insensitively() {
        let a = SortKey::Text("alpha".into());
        let b = SortKey::Text("ALPHA".into());
        assert_eq!(a, b);
        assert!(SortKey::Text("beta".into()) > a);
    }

    #[test]
    fn time_keys_order_chronologically() {
        let early = SortKey::Time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let late = SortKey::Time(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert!(early < late);
    }
}
