use cms_core::domain::JobPosting;

pub(super) fn seed() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "job_001".into(),
            title: "Senior Game Developer".into(),
            slug: "senior-game-developer".into(),
            location: "Remote / San Francisco, CA".into(),
            description: "Design and implement gameplay systems, collaborate with \
                          artists and designers, and mentor junior developers. 5+ years \
                          of game development experience required."
                .into(),
            apply_link: "mailto:careers@deckerdanis.com?subject=Senior Game Developer".into(),
            is_active: true,
        },
        JobPosting {
            id: "job_002".into(),
            title: "UI/UX Designer".into(),
            slug: "ui-ux-designer".into(),
            location: "Los Angeles, CA".into(),
            description: "Craft intuitive, beautiful game interfaces: wireframes, \
                          prototypes, and user research alongside the development team. \
                          3+ years of UI/UX experience required."
                .into(),
            apply_link: "mailto:careers@deckerdanis.com?subject=UI/UX Designer".into(),
            is_active: true,
        },
        JobPosting {
            id: "job_003".into(),
            title: "3D Environment Artist".into(),
            slug: "3d-environment-artist".into(),
            location: "Austin, TX".into(),
            description: "Create stunning environments and props, realize concept art, \
                          and optimize assets for game performance. This round of \
                          hiring has closed."
                .into(),
            apply_link: "mailto:careers@deckerdanis.com?subject=3D Environment Artist".into(),
            is_active: false,
        },
    ]
}
