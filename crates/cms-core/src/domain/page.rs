use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ContentStatus, Seo};
use crate::query::{ContentRecord, SortKey};

/// Layout template a page renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageTemplate {
    Default,
    Landing,
    GameDetail,
    About,
}

/// Static page entity (about, careers intro, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub template: PageTemplate,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ContentStatus,
    pub seo: Seo,
}

impl ContentRecord for Page {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "title" => Some(SortKey::Text(self.title.clone())),
            "slug" => Some(SortKey::Text(self.slug.clone())),
            "publishedAt" => Some(SortKey::Time(self.published_at)),
            "updatedAt" => Some(SortKey::Time(self.updated_at)),
            _ => None,
        }
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }
}
