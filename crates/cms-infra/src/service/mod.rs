//! The content query service.
//!
//! One accessor pair per resource kind: a list form running the
//! filter/sort/paginate pipeline, and a single-item form doing exact slug
//! lookup. Every accessor reads through the TTL cache; a miss pays the
//! chaos policy's simulated latency and fault before recomputing.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use cms_core::ContentError;
use cms_core::domain::{BlogPost, Game, GameUpdate, JobPosting, NewsArticle, Page};
use cms_core::ports::{Cache, CacheStats, ChaosPolicy};
use cms_core::query::{ContentRecord, Paged, QueryParams, SortSpec, run};

use crate::cache::InMemoryCache;
use crate::catalog::Catalog;
use crate::chaos::NoChaos;

/// How long a cached response stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Labels for one resource kind, used in cache keys and error messages.
struct Resource {
    /// Cache key namespace.
    key: &'static str,
    /// Capitalized singular, for "not found" messages.
    singular: &'static str,
    /// Lowercase singular, for single-item fetch failures.
    item: &'static str,
    /// Lowercase plural, for list fetch failures.
    plural: &'static str,
}

const BLOG: Resource = Resource {
    key: "blog-posts",
    singular: "Blog post",
    item: "blog post",
    plural: "blog posts",
};
const NEWS: Resource = Resource {
    key: "news-articles",
    singular: "News article",
    item: "news article",
    plural: "news articles",
};
const UPDATES: Resource = Resource {
    key: "game-updates",
    singular: "Game update",
    item: "game update",
    plural: "game updates",
};
const GAMES: Resource = Resource {
    key: "games",
    singular: "Game",
    item: "game",
    plural: "games",
};
const PAGES: Resource = Resource {
    key: "pages",
    singular: "Page",
    item: "page",
    plural: "pages",
};
const JOBS: Resource = Resource {
    key: "jobs",
    singular: "Job posting",
    item: "job posting",
    plural: "job postings",
};

/// Read-only content API over the seeded catalog.
///
/// The cache is owned by the service instance - created with it, cleared
/// through [`ContentService::clear_cache`], never persisted.
pub struct ContentService {
    catalog: Arc<Catalog>,
    cache: Arc<dyn Cache>,
    chaos: Arc<dyn ChaosPolicy>,
    ttl: Duration,
}

impl ContentService {
    pub fn new(
        catalog: Catalog,
        cache: Arc<dyn Cache>,
        chaos: Arc<dyn ChaosPolicy>,
        ttl: Duration,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cache,
            chaos,
            ttl,
        }
    }

    /// Seeded catalog, in-memory cache, no chaos - the development default.
    pub fn seeded() -> Self {
        Self::new(
            Catalog::seed(),
            Arc::new(InMemoryCache::new()),
            Arc::new(NoChaos),
            DEFAULT_TTL,
        )
    }

    // Blog posts

    pub async fn list_blog_posts(
        &self,
        params: &QueryParams,
    ) -> Result<Paged<BlogPost>, ContentError> {
        self.list(&BLOG, &self.catalog.blog_posts, SortSpec::desc("publishedAt"), params)
            .await
    }

    pub async fn get_blog_post(&self, slug: &str) -> Result<BlogPost, ContentError> {
        self.get(&BLOG, &self.catalog.blog_posts, slug).await
    }

    // News articles

    pub async fn list_news_articles(
        &self,
        params: &QueryParams,
    ) -> Result<Paged<NewsArticle>, ContentError> {
        self.list(&NEWS, &self.catalog.news_articles, SortSpec::desc("publishedAt"), params)
            .await
    }

    pub async fn get_news_article(&self, slug: &str) -> Result<NewsArticle, ContentError> {
        self.get(&NEWS, &self.catalog.news_articles, slug).await
    }

    // Game updates

    pub async fn list_game_updates(
        &self,
        params: &QueryParams,
    ) -> Result<Paged<GameUpdate>, ContentError> {
        self.list(&UPDATES, &self.catalog.game_updates, SortSpec::desc("releaseDate"), params)
            .await
    }

    pub async fn get_game_update(&self, slug: &str) -> Result<GameUpdate, ContentError> {
        self.get(&UPDATES, &self.catalog.game_updates, slug).await
    }

    // Games

    pub async fn list_games(&self, params: &QueryParams) -> Result<Paged<Game>, ContentError> {
        self.list(&GAMES, &self.catalog.games, SortSpec::desc("releaseDate"), params)
            .await
    }

    pub async fn get_game(&self, slug: &str) -> Result<Game, ContentError> {
        self.get(&GAMES, &self.catalog.games, slug).await
    }

    // Pages

    pub async fn list_pages(&self, params: &QueryParams) -> Result<Paged<Page>, ContentError> {
        self.list(&PAGES, &self.catalog.pages, SortSpec::desc("updatedAt"), params)
            .await
    }

    pub async fn get_page(&self, slug: &str) -> Result<Page, ContentError> {
        self.get(&PAGES, &self.catalog.pages, slug).await
    }

    // Job postings

    pub async fn list_jobs(&self, params: &QueryParams) -> Result<Paged<JobPosting>, ContentError> {
        self.list(&JOBS, &self.catalog.jobs, SortSpec::asc("title"), params)
            .await
    }

    pub async fn get_job(&self, slug: &str) -> Result<JobPosting, ContentError> {
        self.get(&JOBS, &self.catalog.jobs, slug).await
    }

    // Cache administration

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        tracing::info!("content cache cleared");
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    // Pipeline plumbing

    async fn list<T>(
        &self,
        res: &Resource,
        items: &[T],
        default_sort: SortSpec,
        params: &QueryParams,
    ) -> Result<Paged<T>, ContentError>
    where
        T: ContentRecord + Clone + Serialize + DeserializeOwned,
    {
        let key = list_cache_key(res, params);
        if let Some(hit) = self.read_cache(&key).await {
            return Ok(hit);
        }

        self.simulate_upstream(res.plural).await?;

        let page = run(items, params, &default_sort);
        self.write_cache(&key, &page).await;
        Ok(page)
    }

    async fn get<T>(&self, res: &Resource, items: &[T], slug: &str) -> Result<T, ContentError>
    where
        T: ContentRecord + Clone + Serialize + DeserializeOwned,
    {
        let key = format!("{}/{}", res.key, slug);
        if let Some(hit) = self.read_cache(&key).await {
            return Ok(hit);
        }

        self.simulate_upstream(res.item).await?;

        let item = items
            .iter()
            .find(|i| i.slug() == slug)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                resource: res.singular,
                slug: slug.to_string(),
            })?;

        self.write_cache(&key, &item).await;
        Ok(item)
    }

    /// Apply the chaos policy's latency and fault before touching the data.
    async fn simulate_upstream(&self, resource: &'static str) -> Result<(), ContentError> {
        let delay = self.chaos.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.chaos.should_fail() {
            return Err(ContentError::FetchFailed { resource });
        }

        Ok(())
    }

    async fn read_cache<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.cache.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!(key, "cache hit");
                Some(value)
            }
            Err(err) => {
                // A decode failure means the entry was written by an older
                // shape of the type; treat it as a miss.
                tracing::warn!(key, %err, "dropping undecodable cache entry");
                None
            }
        }
    }

    /// Cache failures degrade to recomputation; they never fail a request.
    async fn write_cache<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(err) = self.cache.set(key, &raw, Some(self.ttl)).await {
                    tracing::warn!(key, %err, "failed to cache response");
                }
            }
            Err(err) => {
                tracing::warn!(key, %err, "failed to serialize response for caching");
            }
        }
    }
}

/// Collection name plus the serialized query params.
fn list_cache_key(res: &Resource, params: &QueryParams) -> String {
    let params_json =
        serde_json::to_string(params).unwrap_or_else(|_| format!("{params:?}"));
    format!("{}?{}", res.key, params_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::query::Filters;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Fails every fetch after letting the first one through.
    struct FailAfterFirst {
        used: AtomicBool,
    }

    impl FailAfterFirst {
        fn new() -> Self {
            Self {
                used: AtomicBool::new(false),
            }
        }
    }

    impl ChaosPolicy for FailAfterFirst {
        fn should_fail(&self) -> bool {
            self.used.swap(true, Ordering::SeqCst)
        }
    }

    struct AlwaysFail;

    impl ChaosPolicy for AlwaysFail {
        fn should_fail(&self) -> bool {
            true
        }
    }

    fn service_with(chaos: Arc<dyn ChaosPolicy>) -> ContentService {
        ContentService::new(
            Catalog::seed(),
            Arc::new(InMemoryCache::new()),
            chaos,
            DEFAULT_TTL,
        )
    }

    fn published_page(page_size: usize) -> QueryParams {
        QueryParams::new(
            Some(1),
            Some(page_size),
            None,
            Filters {
                status: Some("published".into()),
                ..Filters::default()
            },
        )
    }

    #[tokio::test]
    async fn published_posts_paginate_with_full_totals() {
        let service = ContentService::seeded();
        let page = service.list_blog_posts(&published_page(1)).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.page_count, 2);
    }

    #[tokio::test]
    async fn blog_posts_default_to_newest_first() {
        let service = ContentService::seeded();
        let page = service.list_blog_posts(&QueryParams::default()).await.unwrap();

        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["post_001", "post_002"]);
    }

    #[tokio::test]
    async fn news_sorts_oldest_first_when_asked() {
        let service = ContentService::seeded();
        let params = QueryParams::new(
            None,
            None,
            SortSpec::parse("publishedAt:asc"),
            Filters::default(),
        );
        let page = service.list_news_articles(&params).await.unwrap();

        let ids: Vec<&str> = page.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["news_003", "news_002", "news_001"]);
    }

    #[tokio::test]
    async fn search_finds_a_term_present_only_in_a_tag() {
        let service = ContentService::seeded();
        let params = QueryParams::new(
            None,
            None,
            None,
            Filters {
                search: Some("behind".into()),
                ..Filters::default()
            },
        );
        let page = service.list_blog_posts(&params).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "post_001");
    }

    #[tokio::test]
    async fn get_game_by_slug_finds_the_record() {
        let service = ContentService::seeded();
        let game = service.get_game("mystic-realms").await.unwrap();
        assert_eq!(game.name, "Mystic Realms");
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found_not_a_generic_failure() {
        let service = ContentService::seeded();
        let err = service.get_game("does-not-exist").await.unwrap_err();
        assert!(matches!(
            err,
            ContentError::NotFound { resource: "Game", .. }
        ));
    }

    #[tokio::test]
    async fn active_jobs_filter_by_status_label() {
        let service = ContentService::seeded();
        let params = QueryParams::new(
            None,
            None,
            None,
            Filters {
                status: Some("active".into()),
                ..Filters::default()
            },
        );
        let page = service.list_jobs(&params).await.unwrap();

        assert_eq!(page.pagination.total, 2);
        assert!(page.items.iter().all(|j| j.is_active));
    }

    #[tokio::test]
    async fn injected_fault_surfaces_as_fetch_failed() {
        let service = service_with(Arc::new(AlwaysFail));
        let err = service
            .list_blog_posts(&QueryParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::FetchFailed { resource: "blog posts" }));
    }

    #[tokio::test]
    async fn cache_hit_skips_the_failing_upstream() {
        let service = service_with(Arc::new(FailAfterFirst::new()));
        let params = QueryParams::default();

        let first = service.list_blog_posts(&params).await.unwrap();
        // Upstream now fails every time, but the cached page still serves.
        let second = service.list_blog_posts(&params).await.unwrap();

        assert_eq!(first.pagination, second.pagination);
        assert_eq!(
            first.items.iter().map(|p| &p.id).collect::<Vec<_>>(),
            second.items.iter().map(|p| &p.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn clear_cache_empties_the_store() {
        let service = ContentService::seeded();
        service.list_games(&QueryParams::default()).await.unwrap();
        service.get_page("about").await.unwrap();
        assert_eq!(service.cache_stats().await.entries, 2);

        service.clear_cache().await;
        assert_eq!(service.cache_stats().await.entries, 0);
    }

    #[tokio::test]
    async fn distinct_params_use_distinct_cache_keys() {
        let service = ContentService::seeded();
        service.list_blog_posts(&QueryParams::default()).await.unwrap();
        service.list_blog_posts(&published_page(1)).await.unwrap();
        assert_eq!(service.cache_stats().await.entries, 2);
    }
}
