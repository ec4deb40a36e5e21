use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::config::WidgetConfig;
use crate::domain::RepoSummary;
use crate::sources::RepoSource;
use crate::storage::KeyValueStore;

/// Loads the configured repository cards, one concurrent request per name.
pub struct RepoService<S: KeyValueStore> {
    source: Box<dyn RepoSource>,
    cache: CacheStore<S>,
    repo_names: Vec<String>,
    cache_key: String,
    cache_ttl: Duration,
    in_flight: Mutex<()>,
}

impl<S: KeyValueStore> RepoService<S> {
    pub fn new(config: &WidgetConfig, source: Box<dyn RepoSource>, cache: CacheStore<S>) -> Self {
        Self {
            source,
            cache,
            repo_names: config.pinned_repos.clone(),
            cache_key: config.repos_cache_key.clone(),
            cache_ttl: config.cache_ttl,
            in_flight: Mutex::new(()),
        }
    }

    pub async fn load_repos(&self) -> Vec<RepoSummary> {
        let _guard = self.in_flight.lock().await;

        if let Some(repos) = self
            .cache
            .get::<Vec<RepoSummary>>(&self.cache_key, self.cache_ttl)
        {
            info!(count = repos.len(), "serving repos from cache");
            return repos;
        }

        self.fetch_and_cache().await
    }

    pub async fn refresh_repos(&self) -> Vec<RepoSummary> {
        let _guard = self.in_flight.lock().await;
        self.fetch_and_cache().await
    }

    async fn fetch_and_cache(&self) -> Vec<RepoSummary> {
        let results = join_all(
            self.repo_names
                .iter()
                .map(|name| self.source.fetch_repo(name)),
        )
        .await;

        let repos: Vec<RepoSummary> = self
            .repo_names
            .iter()
            .zip(results)
            .filter_map(|(name, result)| match result {
                Ok(repo) => Some(repo),
                Err(e) => {
                    warn!(repo = %name, error = %e, "repo fetch failed");
                    None
                }
            })
            .collect();

        // Only a list with at least one repository is worth caching
        if !repos.is_empty() {
            self.cache.put(&self.cache_key, &repos);
        }

        repos
    }
}
