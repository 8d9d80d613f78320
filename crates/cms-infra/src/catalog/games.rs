use cms_core::domain::{Discount, Game, GameStatus, Price, Review, Seo};

use super::{date, image};

pub(super) fn seed() -> Vec<Game> {
    vec![
        Game {
            id: "game_001".into(),
            name: "Mystic Realms".into(),
            slug: "mystic-realms".into(),
            short_description: "An epic fantasy RPG where magic and mystery collide in a \
                                world of ancient secrets."
                .into(),
            full_description: "Embark on an unforgettable journey through the Mystic \
                               Realms, where ancient magic flows through every stone and \
                               shadow. Master multiple schools of magic, craft legendary \
                               weapons, and shape your destiny in a world where every \
                               choice matters."
                .into(),
            genre: vec!["RPG".into(), "Fantasy".into(), "Adventure".into()],
            platforms: vec![
                "PC".into(),
                "Steam Deck".into(),
                "PlayStation 5".into(),
                "Xbox Series X/S".into(),
            ],
            release_date: date(2023, 6, 15, 0, 0),
            status: GameStatus::Released,
            price: Price {
                base: 49.99,
                currency: "USD".into(),
                discount: Some(Discount {
                    percentage: 20,
                    valid_until: date(2024, 2, 1, 0, 0),
                }),
            },
            cover_image: image(
                "img_003",
                "/images/games/mystic-realms/screenshot-1.jpg",
                "Mystic Realms Gameplay Screenshot",
                1920,
                1080,
            ),
            screenshots: vec![image(
                "img_003",
                "/images/games/mystic-realms/screenshot-1.jpg",
                "Mystic Realms Gameplay Screenshot",
                1920,
                1080,
            )],
            features: vec![
                "Epic single-player campaign (60+ hours)".into(),
                "Dynamic magic system with 8 schools of magic".into(),
                "Branching storylines with multiple endings".into(),
                "Open world exploration with hidden secrets".into(),
            ],
            reviews: vec![
                Review {
                    score: 9.2,
                    source: "GameReviewer".into(),
                    quote: Some("A masterpiece of storytelling and world-building.".into()),
                    url: Some("https://gamereviewer.com/mystic-realms-review".into()),
                },
                Review {
                    score: 8.8,
                    source: "RPG Central".into(),
                    quote: Some("The magic system is incredibly deep and satisfying.".into()),
                    url: None,
                },
            ],
            seo: Seo {
                meta_title: Some("Mystic Realms - Epic Fantasy RPG | DeckerDanis Studios".into()),
                meta_description: Some(
                    "Master ancient magic, explore vast worlds, and shape your destiny.".into(),
                ),
                keywords: vec!["fantasy RPG".into(), "open world".into()],
            },
        },
        Game {
            id: "game_002".into(),
            name: "Shadow Chronicles".into(),
            slug: "shadow-chronicles".into(),
            short_description: "Master the art of shadows in this tactical RPG where every \
                                choice shapes your destiny."
                .into(),
            full_description: "Stealth-based gameplay meets branching storylines. Build \
                               your operative, vanish into the dark, and decide who rules \
                               the city when the lights come back on."
                .into(),
            genre: vec!["Action RPG".into(), "Stealth".into()],
            platforms: vec!["PC".into(), "Nintendo Switch".into()],
            release_date: date(2024, 6, 20, 0, 0),
            status: GameStatus::EarlyAccess,
            price: Price {
                base: 29.99,
                currency: "USD".into(),
                discount: None,
            },
            cover_image: image(
                "img_004",
                "/images/games/shadow-chronicles-hero.jpg",
                "Shadow Chronicles Key Art",
                1920,
                1080,
            ),
            screenshots: Vec::new(),
            features: vec![
                "Stealth-based gameplay".into(),
                "Branching storylines".into(),
                "Character customization".into(),
                "PvP combat".into(),
            ],
            reviews: Vec::new(),
            seo: Seo::default(),
        },
        Game {
            id: "game_003".into(),
            name: "Dragon's Legacy".into(),
            slug: "dragons-legacy".into(),
            short_description: "Forge an unbreakable bond with dragons and build your \
                                legacy in an expansive fantasy world."
                .into(),
            full_description: "A massive shared world built around the dragon companion \
                               system: raise your wyrm from hatchling to ancient, claim \
                               territory, and wage guild warfare across the skies."
                .into(),
            genre: vec!["MMORPG".into(), "Fantasy".into()],
            platforms: vec!["PC".into(), "PlayStation 5".into(), "Xbox Series X/S".into()],
            release_date: date(2024, 9, 10, 0, 0),
            status: GameStatus::ComingSoon,
            price: Price {
                base: 59.99,
                currency: "USD".into(),
                discount: None,
            },
            cover_image: image(
                "img_005",
                "/images/games/dragons-legacy-hero.jpg",
                "Dragon's Legacy Key Art",
                1920,
                1080,
            ),
            screenshots: Vec::new(),
            features: vec![
                "Dragon companion system".into(),
                "Massive world to explore".into(),
                "Crafting and building".into(),
                "Guild warfare".into(),
            ],
            reviews: Vec::new(),
            seo: Seo::default(),
        },
    ]
}
