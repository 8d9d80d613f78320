use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Author, Image};
use crate::query::{ContentRecord, SortKey};

/// Game update entity - a patch or content drop for a shipped game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Semantic version string of the patch ("2.1.0").
    pub version: String,
    pub game_id: String,
    pub game_name: String,
    pub description: String,
    /// Markdown changelog body.
    pub changelog: String,
    pub release_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    pub platforms: Vec<String>,
    pub is_hotfix: bool,
    pub is_major_update: bool,
    pub images: Vec<Image>,
    pub author: Author,
}

impl ContentRecord for GameUpdate {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "title" => Some(SortKey::Text(self.title.clone())),
            "slug" => Some(SortKey::Text(self.slug.clone())),
            "version" => Some(SortKey::Text(self.version.clone())),
            "gameName" => Some(SortKey::Text(self.game_name.clone())),
            "releaseDate" => Some(SortKey::Time(self.release_date)),
            "isHotfix" => Some(SortKey::Bool(self.is_hotfix)),
            "isMajorUpdate" => Some(SortKey::Bool(self.is_major_update)),
            "author.name" => Some(SortKey::Text(self.author.name.clone())),
            _ => None,
        }
    }

    fn author(&self) -> Option<&Author> {
        Some(&self.author)
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.changelog.as_str(),
            self.game_name.as_str(),
        ]
    }
}
