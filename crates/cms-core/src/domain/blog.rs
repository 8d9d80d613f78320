use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Author, Category, ContentStatus, Image, Seo, Tag};
use crate::query::{ContentRecord, SortKey};

/// Blog post entity - long-form editorial content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<Image>,
    pub author: Author,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ContentStatus,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    pub seo: Seo,
}

impl ContentRecord for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "title" => Some(SortKey::Text(self.title.clone())),
            "slug" => Some(SortKey::Text(self.slug.clone())),
            "publishedAt" => Some(SortKey::Time(self.published_at)),
            "updatedAt" => Some(SortKey::Time(self.updated_at)),
            "readingTime" => Some(SortKey::Int(self.reading_time as i64)),
            "author.name" => Some(SortKey::Text(self.author.name.clone())),
            "category.name" => Some(SortKey::Text(self.category.name.clone())),
            _ => None,
        }
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn category(&self) -> Option<&Category> {
        Some(&self.category)
    }

    fn author(&self) -> Option<&Author> {
        Some(&self.author)
    }

    fn search_haystack(&self) -> Vec<&str> {
        let mut hay = vec![self.title.as_str(), self.excerpt.as_str(), self.content.as_str()];
        hay.extend(self.tags.iter().map(|t| t.name.as_str()));
        hay
    }
}
