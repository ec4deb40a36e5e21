use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::config::WidgetConfig;
use crate::domain::{PinnedArticle, Post};
use crate::services::aggregation::aggregate;
use crate::sources::SourceRegistry;
use crate::storage::KeyValueStore;

/// The post aggregation pipeline: cache, fetch, merge, dedupe, pin, order, truncate.
pub struct PostService<S: KeyValueStore> {
    sources: SourceRegistry,
    cache: CacheStore<S>,
    pinned: Vec<PinnedArticle>,
    max_posts: usize,
    cache_key: String,
    cache_ttl: Duration,
    // Serializes loads so a concurrent caller reads the fresh cache entry
    in_flight: Mutex<()>,
}

impl<S: KeyValueStore> PostService<S> {
    pub fn new(config: &WidgetConfig, sources: SourceRegistry, cache: CacheStore<S>) -> Self {
        Self {
            sources,
            cache,
            pinned: config.pinned_articles.clone(),
            max_posts: config.max_posts,
            cache_key: config.posts_cache_key.clone(),
            cache_ttl: config.cache_ttl,
            in_flight: Mutex::new(()),
        }
    }

    /// Cached posts if fresh, otherwise fetch and cache a new list.
    pub async fn load_posts(&self) -> Vec<Post> {
        let _guard = self.in_flight.lock().await;

        if let Some(posts) = self.cache.get::<Vec<Post>>(&self.cache_key, self.cache_ttl) {
            info!(count = posts.len(), "serving posts from cache");
            return posts;
        }

        self.fetch_and_cache().await
    }

    /// Skip the cache read, fetch, and overwrite the cached list.
    pub async fn refresh_posts(&self) -> Vec<Post> {
        let _guard = self.in_flight.lock().await;
        self.fetch_and_cache().await
    }

    async fn fetch_and_cache(&self) -> Vec<Post> {
        debug!(sources = self.sources.len(), "fetching posts");
        let batches = self.sources.fetch_all().await;
        let fetched: usize = batches.iter().map(Vec::len).sum();

        // The truncated list is what gets cached; posts beyond max_posts are
        // not reconsidered until the entry expires.
        let posts = aggregate(batches, &self.pinned, self.max_posts);

        if posts.is_empty() {
            warn!("no posts available from any source");
        } else {
            info!(fetched, kept = posts.len(), "aggregated posts");
        }

        self.cache.put(&self.cache_key, &posts);
        posts
    }
}
