//! Data Transfer Objects - the raw query string of a list endpoint.

use serde::Deserialize;

use cms_core::query::{Filters, QueryParams, SortSpec};

/// Raw list-endpoint query string.
///
/// Everything is an optional string: missing or unparseable values fall
/// back to the documented defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub search: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ListQuery {
    /// Validate into pipeline params, applying defaults for anything
    /// missing or malformed.
    pub fn into_params(self) -> QueryParams {
        QueryParams::new(
            self.page.and_then(|p| p.trim().parse().ok()),
            self.page_size.and_then(|s| s.trim().parse().ok()),
            self.sort.as_deref().and_then(SortSpec::parse),
            Filters {
                status: non_empty(self.status),
                category: non_empty(self.category),
                author: non_empty(self.author),
                search: non_empty(self.search),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::query::Direction;

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let query = ListQuery {
            page: Some("abc".into()),
            page_size: Some("-3".into()),
            ..ListQuery::default()
        };
        let params = query.into_params();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
    }

    #[test]
    fn sort_and_filters_pass_through() {
        let query = ListQuery {
            sort: Some("publishedAt:desc".into()),
            status: Some("published".into()),
            search: Some("".into()),
            ..ListQuery::default()
        };
        let params = query.into_params();

        let sort = params.sort.unwrap();
        assert_eq!(sort.field, "publishedAt");
        assert_eq!(sort.direction, Direction::Desc);
        assert_eq!(params.filters.status.as_deref(), Some("published"));
        // Blank filter values are dropped, not matched literally.
        assert!(params.filters.search.is_none());
    }
}
