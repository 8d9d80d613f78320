//! HTTP handlers and route configuration.

mod content;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/cms")
                    // Cache administration
                    .route("/cache/stats", web::get().to(content::cache_stats))
                    .route("/cache/clear", web::post().to(content::clear_cache))
                    // Content collections
                    .route("/blog", web::get().to(content::list_blog_posts))
                    .route("/blog/{slug}", web::get().to(content::get_blog_post))
                    .route("/news", web::get().to(content::list_news_articles))
                    .route("/news/{slug}", web::get().to(content::get_news_article))
                    .route("/updates", web::get().to(content::list_game_updates))
                    .route("/updates/{slug}", web::get().to(content::get_game_update))
                    .route("/games", web::get().to(content::list_games))
                    .route("/games/{slug}", web::get().to(content::get_game))
                    .route("/pages", web::get().to(content::list_pages))
                    .route("/pages/{slug}", web::get().to(content::get_page))
                    .route("/jobs", web::get().to(content::list_jobs))
                    .route("/jobs/{slug}", web::get().to(content::get_job)),
            ),
    );
}
