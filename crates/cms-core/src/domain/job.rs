use serde::{Deserialize, Serialize};

use crate::query::{ContentRecord, SortKey};

/// Open position listed on the careers page.
///
/// Jobs have no editorial timestamps; their slug is derived from the title
/// when seeded and their status filter matches "active" / "closed".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
    pub is_active: bool,
}

impl ContentRecord for JobPosting {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "title" => Some(SortKey::Text(self.title.clone())),
            "slug" => Some(SortKey::Text(self.slug.clone())),
            "location" => Some(SortKey::Text(self.location.clone())),
            "isActive" => Some(SortKey::Bool(self.is_active)),
            _ => None,
        }
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(if self.is_active { "active" } else { "closed" })
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str(), self.description.as_str()]
    }
}
