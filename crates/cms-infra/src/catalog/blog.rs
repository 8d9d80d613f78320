use cms_core::domain::{BlogPost, ContentStatus, Seo};

use super::{author_john, author_sarah, category_community, category_development, date, image, tag};

pub(super) fn seed() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "post_001".into(),
            title: "The Art of Creating Immersive RPG Worlds".into(),
            slug: "art-of-creating-immersive-rpg-worlds".into(),
            excerpt: "Discover the techniques and philosophies that make game worlds \
                      captivate players for hundreds of hours."
                .into(),
            content: "# The Art of Creating Immersive RPG Worlds\n\n\
                      Creating an immersive RPG world is both an art and a science. It \
                      takes consistent lore, a rich history that shapes the present, \
                      diverse cultures with their own customs, and environments that \
                      tell their own story.\n\n\
                      ## Character Development\n\n\
                      Characters are the heart of any RPG. They should feel real, with \
                      their own motivations, flaws, and growth arcs."
                .into(),
            featured_image: Some(image(
                "img_002",
                "/images/blog/game-development-insights.jpg",
                "Game Development Insights",
                1200,
                630,
            )),
            author: author_john(),
            category: category_development(),
            tags: vec![
                tag("tag_001", "RPG", "rpg"),
                tag("tag_002", "Game Design", "game-design"),
                tag("tag_005", "Behind the Scenes", "behind-the-scenes"),
            ],
            published_at: date(2024, 1, 15, 10, 0),
            updated_at: date(2024, 1, 15, 10, 0),
            status: ContentStatus::Published,
            reading_time: 8,
            seo: Seo {
                meta_title: Some("The Art of Creating Immersive RPG Worlds | DeckerDanis Blog".into()),
                meta_description: Some(
                    "Learn the techniques that keep players engaged for hundreds of hours.".into(),
                ),
                keywords: vec![
                    "RPG".into(),
                    "game development".into(),
                    "world building".into(),
                ],
            },
        },
        BlogPost {
            id: "post_002".into(),
            title: "Community Spotlight: Player-Created Content".into(),
            slug: "community-spotlight-player-created-content".into(),
            excerpt: "Celebrating the amazing mods, fan art, and stories created by our \
                      incredible community."
                .into(),
            content: "# Community Spotlight: Player-Created Content\n\n\
                      Our community never ceases to amaze us with their creativity and \
                      passion. This month we collected the mods, fan art, and stories \
                      that stood out."
                .into(),
            featured_image: None,
            author: author_sarah(),
            category: category_community(),
            tags: vec![
                tag("tag_003", "Community", "community"),
                tag("tag_001", "RPG", "rpg"),
            ],
            published_at: date(2024, 1, 10, 14, 30),
            updated_at: date(2024, 1, 10, 14, 30),
            status: ContentStatus::Published,
            reading_time: 5,
            seo: Seo {
                meta_title: Some("Community Spotlight: Player-Created Content | DeckerDanis".into()),
                meta_description: Some(
                    "Celebrating amazing mods, fan art, and stories from our community.".into(),
                ),
                keywords: vec!["community".into(), "fan art".into(), "mods".into()],
            },
        },
    ]
}
