use cms_core::domain::{ContentStatus, Page, PageTemplate, Seo};

use super::date;

pub(super) fn seed() -> Vec<Page> {
    vec![
        Page {
            id: "page_001".into(),
            title: "About DeckerDanis Studios".into(),
            slug: "about".into(),
            content: "# About DeckerDanis Studios\n\n\
                      Founded in 2020, DeckerDanis Studios is an independent game \
                      development company dedicated to immersive RPG experiences. We \
                      believe in the power of storytelling, innovative mechanics, and \
                      adventures that feel personal to every player."
                .into(),
            template: PageTemplate::About,
            published_at: date(2024, 1, 1, 0, 0),
            updated_at: date(2024, 1, 15, 12, 0),
            status: ContentStatus::Published,
            seo: Seo {
                meta_title: Some("About Us | DeckerDanis Studios".into()),
                meta_description: Some(
                    "Learn about our mission, team, and passion for RPGs.".into(),
                ),
                keywords: vec!["about".into(), "game studio".into()],
            },
        },
        Page {
            id: "page_002".into(),
            title: "Careers at DeckerDanis".into(),
            slug: "careers".into(),
            content: "# Careers\n\n\
                      We hire people who love games and the craft behind them. Open \
                      roles are listed below; if nothing fits, write to us anyway."
                .into(),
            template: PageTemplate::Default,
            published_at: date(2024, 1, 3, 0, 0),
            updated_at: date(2024, 1, 3, 0, 0),
            status: ContentStatus::Published,
            seo: Seo::default(),
        },
    ]
}
