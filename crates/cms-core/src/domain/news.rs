use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Author, ContentStatus, Image, Seo};
use crate::query::{ContentRecord, SortKey};

/// Kind of news article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsType {
    Announcement,
    PressRelease,
    Community,
    Development,
}

/// Editorial priority used by the front page to weight placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// News article entity - announcements, press releases, community posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<Image>,
    pub author: Author,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ContentStatus,
    #[serde(rename = "type")]
    pub news_type: NewsType,
    pub priority: Priority,
    pub seo: Seo,
}

impl ContentRecord for NewsArticle {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "title" => Some(SortKey::Text(self.title.clone())),
            "slug" => Some(SortKey::Text(self.slug.clone())),
            "publishedAt" => Some(SortKey::Time(self.published_at)),
            "updatedAt" => Some(SortKey::Time(self.updated_at)),
            "priority" => Some(SortKey::Int(self.priority as i64)),
            "author.name" => Some(SortKey::Text(self.author.name.clone())),
            _ => None,
        }
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn author(&self) -> Option<&Author> {
        Some(&self.author)
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str(), self.content.as_str()]
    }
}
