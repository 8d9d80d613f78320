use cms_core::domain::{ContentStatus, NewsArticle, NewsType, Priority, Seo};

use super::{author_john, author_sarah, date};

pub(super) fn seed() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: "news_001".into(),
            title: "DeckerDanis Studios Announces Partnership with Indie Game Collective".into(),
            slug: "partnership-indie-game-collective".into(),
            excerpt: "We're excited to announce a new partnership that will bring more \
                      amazing indie games to players worldwide."
                .into(),
            content: "# Partnership with Indie Game Collective\n\n\
                      We're thrilled to announce our strategic partnership with the \
                      Indie Game Collective. Together we will co-publish select titles \
                      and share tooling across studios."
                .into(),
            featured_image: None,
            author: author_sarah(),
            published_at: date(2024, 1, 18, 9, 0),
            updated_at: date(2024, 1, 18, 9, 0),
            status: ContentStatus::Published,
            news_type: NewsType::Announcement,
            priority: Priority::High,
            seo: Seo {
                meta_title: Some("DeckerDanis Partners with Indie Game Collective".into()),
                meta_description: Some(
                    "Strategic partnership to bring more indie games to players worldwide.".into(),
                ),
                keywords: vec!["partnership".into(), "indie games".into()],
            },
        },
        NewsArticle {
            id: "news_002".into(),
            title: "Mystic Realms Crosses One Million Players".into(),
            slug: "mystic-realms-one-million-players".into(),
            excerpt: "A heartfelt thank you to the adventurers who made this milestone \
                      possible."
                .into(),
            content: "# One Million Players\n\n\
                      Six months after launch, Mystic Realms has welcomed its millionth \
                      adventurer. To celebrate, a free cosmetic bundle ships with the \
                      next patch."
                .into(),
            featured_image: None,
            author: author_john(),
            published_at: date(2024, 1, 12, 16, 0),
            updated_at: date(2024, 1, 12, 16, 0),
            status: ContentStatus::Published,
            news_type: NewsType::Community,
            priority: Priority::Medium,
            seo: Seo::default(),
        },
        NewsArticle {
            id: "news_003".into(),
            title: "Devlog: Rebuilding Our Quest Editor".into(),
            slug: "devlog-rebuilding-quest-editor".into(),
            excerpt: "How the tools team rebuilt the quest editor that powers every \
                      branching storyline we ship."
                .into(),
            content: "# Rebuilding the Quest Editor\n\n\
                      The old editor could not express cross-act dependencies. The new \
                      one models quests as graphs, and designers can now preview \
                      branches in place."
                .into(),
            featured_image: None,
            author: author_john(),
            published_at: date(2024, 1, 5, 11, 30),
            updated_at: date(2024, 1, 6, 8, 15),
            status: ContentStatus::Published,
            news_type: NewsType::Development,
            priority: Priority::Low,
            seo: Seo::default(),
        },
    ]
}
