//! The content query pipeline: filter, stable sort, paginate.
//!
//! The pipeline is pure - it reads a borrowed collection and produces a new
//! `Paged` result, so repeated identical queries are idempotent by
//! construction.

mod filter;
mod paginate;
mod record;
mod sort;

pub use filter::{Filters, filter};
pub use paginate::{Paged, Pagination, paginate};
pub use record::{ContentRecord, SortKey};
pub use sort::{Direction, SortSpec, sort};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A validated list query.
///
/// `page` and `page_size` are always >= 1; boundary code builds this via
/// [`QueryParams::new`], which substitutes the documented defaults for
/// missing or invalid values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    #[serde(default, skip_serializing_if = "Filters::is_empty")]
    pub filters: Filters,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            filters: Filters::default(),
        }
    }
}

impl QueryParams {
    /// Build params from optional raw values, falling back to defaults.
    /// A zero page or page size is treated as absent.
    pub fn new(
        page: Option<usize>,
        page_size: Option<usize>,
        sort: Option<SortSpec>,
        filters: Filters,
    ) -> Self {
        Self {
            page: page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE),
            page_size: page_size.filter(|s| *s >= 1).unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
            filters,
        }
    }
}

/// Run the full pipeline over a collection.
///
/// `default_sort` applies when the params carry no sort spec; each resource
/// kind supplies its own (e.g. `publishedAt:desc` for posts).
pub fn run<T: ContentRecord + Clone>(
    items: &[T],
    params: &QueryParams,
    default_sort: &SortSpec,
) -> Paged<T> {
    let mut subset = filter(items, &params.filters);
    let spec = params.sort.as_ref().unwrap_or(default_sort);
    sort(&mut subset, spec);
    paginate(&subset, params.page, params.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal record for exercising the pipeline without full entities.
    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        slug: String,
        title: String,
        status: &'static str,
        body: String,
        rank: i64,
    }

    impl Note {
        fn new(slug: &str, title: &str, status: &'static str, body: &str, rank: i64) -> Self {
            Self {
                slug: slug.into(),
                title: title.into(),
                status,
                body: body.into(),
                rank,
            }
        }
    }

    impl ContentRecord for Note {
        fn slug(&self) -> &str {
            &self.slug
        }

        fn sort_key(&self, field: &str) -> Option<SortKey> {
            match field {
                "title" => Some(SortKey::Text(self.title.clone())),
                "rank" => Some(SortKey::Int(self.rank)),
                _ => None,
            }
        }

        fn status_label(&self) -> Option<&'static str> {
            Some(self.status)
        }

        fn search_haystack(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.body.as_str()]
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note::new("a", "Charlie", "published", "alpha body", 2),
            Note::new("b", "alpha", "draft", "misc", 1),
            Note::new("c", "Bravo", "published", "searchable needle here", 2),
            Note::new("d", "delta", "archived", "misc", 3),
        ]
    }

    #[test]
    fn filter_result_is_a_subset_matching_all_predicates() {
        let src = notes();
        let filters = Filters {
            status: Some("published".into()),
            ..Filters::default()
        };
        let out = filter(&src, &filters);

        assert_eq!(out.len(), 2);
        for item in &out {
            assert_eq!(item.status_label(), Some("published"));
            assert!(src.iter().any(|s| s.slug == item.slug));
        }
        // Source untouched.
        assert_eq!(src.len(), 4);
    }

    #[test]
    fn search_filter_is_case_insensitive_substring() {
        let src = notes();
        let filters = Filters {
            search: Some("NEEDLE".into()),
            ..Filters::default()
        };
        let out = filter(&src, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].slug, "c");
    }

    #[test]
    fn sort_is_a_permutation_in_key_order() {
        let mut items = notes();
        sort(&mut items, &SortSpec::asc("title"));

        let titles: Vec<&str> = items.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha", "Bravo", "Charlie", "delta"]);
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn sort_ties_keep_input_order() {
        let mut items = notes();
        sort(&mut items, &SortSpec::asc("rank"));

        // Both rank-2 notes keep their relative input order (a before c).
        let slugs: Vec<&str> = items.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn unknown_sort_field_preserves_input_order() {
        let mut items = notes();
        sort(&mut items, &SortSpec::asc("nonexistent"));
        let slugs: Vec<&str> = items.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn params_fall_back_to_documented_defaults() {
        let params = QueryParams::new(None, Some(0), None, Filters::default());
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
    }

    #[test]
    fn pipeline_filters_sorts_and_windows() {
        let src = notes();
        let params = QueryParams::new(
            Some(1),
            Some(1),
            None,
            Filters {
                status: Some("published".into()),
                ..Filters::default()
            },
        );
        let page = run(&src, &params, &SortSpec::asc("title"));

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].slug, "c"); // "Bravo" sorts first
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.page_count, 2);
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let src = notes();
        let params = QueryParams::default();
        let first = run(&src, &params, &SortSpec::asc("title"));
        let second = run(&src, &params, &SortSpec::asc("title"));
        assert_eq!(first.items, second.items);
        assert_eq!(first.pagination, second.pagination);
    }
}
