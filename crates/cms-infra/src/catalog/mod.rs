//! The seeded content catalog.
//!
//! All data is fixed at process start and never mutated; the service reads
//! it through an `Arc`. Reference records (authors, categories, tags,
//! images) are embedded by value into each content item, the way a headless
//! CMS denormalizes its responses.

mod blog;
mod games;
mod jobs;
mod news;
mod pages;
mod updates;

use chrono::{DateTime, TimeZone, Utc};

use cms_core::domain::{
    Author, BlogPost, Category, Game, GameUpdate, Image, JobPosting, NewsArticle, Page, Social,
    Tag,
};

/// Every collection served by the CMS.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub blog_posts: Vec<BlogPost>,
    pub news_articles: Vec<NewsArticle>,
    pub game_updates: Vec<GameUpdate>,
    pub games: Vec<Game>,
    pub pages: Vec<Page>,
    pub jobs: Vec<JobPosting>,
}

impl Catalog {
    /// Build the full seeded catalog.
    pub fn seed() -> Self {
        Self {
            blog_posts: blog::seed(),
            news_articles: news::seed(),
            game_updates: updates::seed(),
            games: games::seed(),
            pages: pages::seed(),
            jobs: jobs::seed(),
        }
    }
}

/// Fixed seed timestamps are known-valid, so the panic path is unreachable.
pub(super) fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub(super) fn author_john() -> Author {
    Author {
        id: "author_001".into(),
        name: "John Doe".into(),
        email: "john.doe@deckerdanis.com".into(),
        bio: Some("Lead Game Designer with 10+ years of experience in RPG development.".into()),
        avatar: Some(Image {
            id: "img_001".into(),
            url: "/images/authors/john-doe.jpg".into(),
            alt: "John Doe Avatar".into(),
            width: 200,
            height: 200,
        }),
        social: Some(Social {
            twitter: Some("@johndoe_dev".into()),
            linkedin: Some("linkedin.com/in/johndoe".into()),
            github: Some("github.com/johndoe".into()),
        }),
    }
}

pub(super) fn author_sarah() -> Author {
    Author {
        id: "author_002".into(),
        name: "Sarah Chen".into(),
        email: "sarah.chen@deckerdanis.com".into(),
        bio: Some("Community Manager and Content Creator passionate about gaming culture.".into()),
        avatar: None,
        social: Some(Social {
            twitter: Some("@sarahchen_games".into()),
            ..Social::default()
        }),
    }
}

pub(super) fn category_development() -> Category {
    Category {
        id: "cat_001".into(),
        name: "Development".into(),
        slug: "development".into(),
        description: Some("Behind-the-scenes content about game development".into()),
        color: Some("#8B5CF6".into()),
    }
}

pub(super) fn category_community() -> Category {
    Category {
        id: "cat_002".into(),
        name: "Community".into(),
        slug: "community".into(),
        description: Some("Community highlights and player stories".into()),
        color: Some("#06B6D4".into()),
    }
}

pub(super) fn tag(id: &str, name: &str, slug: &str) -> Tag {
    Tag {
        id: id.into(),
        name: name.into(),
        slug: slug.into(),
    }
}

pub(super) fn image(id: &str, url: &str, alt: &str, width: u32, height: u32) -> Image {
    Image {
        id: id.into(),
        url: url.into(),
        alt: alt.into(),
        width,
        height,
    }
}
