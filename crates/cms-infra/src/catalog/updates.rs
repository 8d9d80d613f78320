use cms_core::domain::GameUpdate;

use super::{author_john, date, image};

pub(super) fn seed() -> Vec<GameUpdate> {
    vec![
        GameUpdate {
            id: "update_001".into(),
            title: "Mystic Realms: The Shadow Update".into(),
            slug: "mystic-realms-shadow-update".into(),
            version: "2.1.0".into(),
            game_id: "game_001".into(),
            game_name: "Mystic Realms".into(),
            description: "A major content update introducing the Shadow Realm, new \
                          character classes, and enhanced combat mechanics."
                .into(),
            changelog: "## New Features\n\
                        - Shadow Realm: explore a dark parallel dimension\n\
                        - Shadow Knight class: master dark magic and stealth\n\
                        - Enhanced combat system with combo attacks\n\
                        - 15 new quests and storylines\n\n\
                        ## Bug Fixes\n\
                        - Fixed inventory sorting issues\n\
                        - Resolved quest progression bugs"
                .into(),
            release_date: date(2024, 1, 20, 0, 0),
            download_url: Some("https://store.steampowered.com/app/mystic-realms".into()),
            file_size: Some("2.3 GB".into()),
            platforms: vec!["PC".into(), "Steam Deck".into()],
            is_hotfix: false,
            is_major_update: true,
            images: vec![image(
                "img_003",
                "/images/games/mystic-realms/screenshot-1.jpg",
                "Mystic Realms Gameplay Screenshot",
                1920,
                1080,
            )],
            author: author_john(),
        },
        GameUpdate {
            id: "update_002".into(),
            title: "Mystic Realms Hotfix 2.1.1".into(),
            slug: "mystic-realms-hotfix-2-1-1".into(),
            version: "2.1.1".into(),
            game_id: "game_001".into(),
            game_name: "Mystic Realms".into(),
            description: "Hotfix for a save corruption affecting Shadow Realm \
                          checkpoints."
                .into(),
            changelog: "## Bug Fixes\n\
                        - Fixed save corruption at Shadow Realm checkpoints\n\
                        - Restored missing audio on the Umbra boss fight"
                .into(),
            release_date: date(2024, 1, 23, 18, 0),
            download_url: None,
            file_size: Some("180 MB".into()),
            platforms: vec!["PC".into(), "Steam Deck".into()],
            is_hotfix: true,
            is_major_update: false,
            images: Vec::new(),
            author: author_john(),
        },
    ]
}
