//! Content resource endpoints.
//!
//! One list + one single-item handler per collection, all read-only.
//! List responses are cacheable for 5 minutes with a 10 minute stale-serve
//! window; single items double both windows.

use actix_web::{HttpResponse, http::header, web};
use serde::Serialize;

use cms_core::query::Paged;
use cms_shared::ApiResponse;
use cms_shared::dto::ListQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const LIST_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";
const ITEM_CACHE_CONTROL: &str = "public, s-maxage=600, stale-while-revalidate=1200";

fn list_response<T: Serialize>(page: Paged<T>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, LIST_CACHE_CONTROL))
        .json(ApiResponse::list(page))
}

fn item_response<T: Serialize>(item: T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, ITEM_CACHE_CONTROL))
        .json(ApiResponse::item(item))
}

fn require_slug(raw: &str) -> AppResult<&str> {
    let slug = raw.trim();
    if slug.is_empty() {
        return Err(AppError::BadRequest("Slug is required".to_string()));
    }
    Ok(slug)
}

/// GET /api/cms/blog
pub async fn list_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner().into_params();
    let page = state.content.list_blog_posts(&params).await?;
    Ok(list_response(page))
}

/// GET /api/cms/blog/{slug}
pub async fn get_blog_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state.content.get_blog_post(require_slug(&slug)?).await?;
    Ok(item_response(post))
}

/// GET /api/cms/news
pub async fn list_news_articles(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner().into_params();
    let page = state.content.list_news_articles(&params).await?;
    Ok(list_response(page))
}

/// GET /api/cms/news/{slug}
pub async fn get_news_article(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let article = state.content.get_news_article(require_slug(&slug)?).await?;
    Ok(item_response(article))
}

/// GET /api/cms/updates
pub async fn list_game_updates(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner().into_params();
    let page = state.content.list_game_updates(&params).await?;
    Ok(list_response(page))
}

/// GET /api/cms/updates/{slug}
pub async fn get_game_update(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let update = state.content.get_game_update(require_slug(&slug)?).await?;
    Ok(item_response(update))
}

/// GET /api/cms/games
pub async fn list_games(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner().into_params();
    let page = state.content.list_games(&params).await?;
    Ok(list_response(page))
}

/// GET /api/cms/games/{slug}
pub async fn get_game(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let game = state.content.get_game(require_slug(&slug)?).await?;
    Ok(item_response(game))
}

/// GET /api/cms/pages
pub async fn list_pages(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner().into_params();
    let page = state.content.list_pages(&params).await?;
    Ok(list_response(page))
}

/// GET /api/cms/pages/{slug}
pub async fn get_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let page = state.content.get_page(require_slug(&slug)?).await?;
    Ok(item_response(page))
}

/// GET /api/cms/jobs
pub async fn list_jobs(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner().into_params();
    let page = state.content.list_jobs(&params).await?;
    Ok(list_response(page))
}

/// GET /api/cms/jobs/{slug}
pub async fn get_job(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let job = state.content.get_job(require_slug(&slug)?).await?;
    Ok(item_response(job))
}

/// GET /api/cms/cache/stats
pub async fn cache_stats(state: web::Data<AppState>) -> HttpResponse {
    let stats = state.content.cache_stats().await;
    HttpResponse::Ok().json(stats)
}

/// POST /api/cms/cache/clear
pub async fn clear_cache(state: web::Data<AppState>) -> HttpResponse {
    state.content.clear_cache().await;
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use std::sync::Arc;

    use cms_core::ports::ChaosPolicy;
    use cms_infra::cache::InMemoryCache;
    use cms_infra::catalog::Catalog;
    use cms_infra::service::{ContentService, DEFAULT_TTL};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn seeded_state() -> AppState {
        AppState {
            content: Arc::new(ContentService::seeded()),
        }
    }

    struct AlwaysFail;

    impl ChaosPolicy for AlwaysFail {
        fn should_fail(&self) -> bool {
            true
        }
    }

    fn failing_state() -> AppState {
        AppState {
            content: Arc::new(ContentService::new(
                Catalog::seed(),
                Arc::new(InMemoryCache::new()),
                Arc::new(AlwaysFail),
                DEFAULT_TTL,
            )),
        }
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn list_endpoint_returns_enveloped_page() {
        let app = init_app!(seeded_state());
        let req = test::TestRequest::get()
            .uri("/api/cms/blog?pageSize=1")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        assert_eq!(
            res.headers().get("cache-control").unwrap(),
            "public, s-maxage=300, stale-while-revalidate=600"
        );

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["meta"]["pagination"]["total"], 2);
        assert_eq!(body["meta"]["pagination"]["pageCount"], 2);
    }

    #[actix_web::test]
    async fn malformed_paging_params_fall_back_to_defaults() {
        let app = init_app!(seeded_state());
        let req = test::TestRequest::get()
            .uri("/api/cms/news?page=abc&pageSize=xyz")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["meta"]["pagination"]["page"], 1);
        assert_eq!(body["meta"]["pagination"]["pageSize"], 10);
    }

    #[actix_web::test]
    async fn single_item_has_empty_meta_and_longer_cache_window() {
        let app = init_app!(seeded_state());
        let req = test::TestRequest::get()
            .uri("/api/cms/games/mystic-realms")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        assert_eq!(
            res.headers().get("cache-control").unwrap(),
            "public, s-maxage=600, stale-while-revalidate=1200"
        );

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["name"], "Mystic Realms");
        assert_eq!(body["meta"], serde_json::json!({}));
    }

    #[actix_web::test]
    async fn unknown_slug_is_404_with_error_body() {
        let app = init_app!(seeded_state());
        let req = test::TestRequest::get()
            .uri("/api/cms/games/does-not-exist")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Game not found");
    }

    #[actix_web::test]
    async fn blank_slug_is_a_bad_request() {
        let app = init_app!(seeded_state());
        let req = test::TestRequest::get()
            .uri("/api/cms/pages/%20")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400);
    }

    #[actix_web::test]
    async fn injected_fault_maps_to_500_with_generic_body() {
        let app = init_app!(failing_state());
        let req = test::TestRequest::get().uri("/api/cms/blog").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 500);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Failed to fetch blog posts");
    }

    #[actix_web::test]
    async fn status_filter_narrows_jobs() {
        let app = init_app!(seeded_state());
        let req = test::TestRequest::get()
            .uri("/api/cms/jobs?status=active")
            .to_request();
        let res = test::call_service(&app, req).await;

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["meta"]["pagination"]["total"], 2);
    }

    #[actix_web::test]
    async fn cache_admin_reports_and_clears() {
        let app = init_app!(seeded_state());

        let req = test::TestRequest::get().uri("/api/cms/games").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/cms/cache/stats")
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["entries"], 1);

        let req = test::TestRequest::post()
            .uri("/api/cms/cache/clear")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 204);

        let req = test::TestRequest::get()
            .uri("/api/cms/cache/stats")
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["entries"], 0);
    }
}
