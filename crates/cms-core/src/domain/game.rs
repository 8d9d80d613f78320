use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Image, Seo};
use crate::query::{ContentRecord, SortKey};

/// Where a game sits in its release lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Development,
    EarlyAccess,
    Released,
    ComingSoon,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Development => "development",
            GameStatus::EarlyAccess => "early-access",
            GameStatus::Released => "released",
            GameStatus::ComingSoon => "coming-soon",
        }
    }
}

/// Time-boxed discount on a game's base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub percentage: u8,
    pub valid_until: DateTime<Utc>,
}

/// Store price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub base: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

/// Third-party review pull quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub score: f32,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Game entity - the studio's catalog listing for one title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub genre: Vec<String>,
    pub platforms: Vec<String>,
    pub release_date: DateTime<Utc>,
    pub status: GameStatus,
    pub price: Price,
    pub cover_image: Image,
    pub screenshots: Vec<Image>,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
    pub seo: Seo,
}

impl ContentRecord for Game {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "name" | "title" => Some(SortKey::Text(self.name.clone())),
            "slug" => Some(SortKey::Text(self.slug.clone())),
            "releaseDate" => Some(SortKey::Time(self.release_date)),
            _ => None,
        }
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn search_haystack(&self) -> Vec<&str> {
        let mut hay = vec![
            self.name.as_str(),
            self.short_description.as_str(),
            self.full_description.as_str(),
        ];
        hay.extend(self.genre.iter().map(String::as_str));
        hay
    }
}
