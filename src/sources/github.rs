// GitHub repository metadata source.
// One unauthenticated GET per repository name against the public REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::Deserialize;

use crate::config::WidgetConfig;
use crate::domain::RepoSummary;
use crate::errors::BlogrollResult;
use crate::sources::http::{build_client, send_checked};
use crate::sources::traits::RepoSource;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Fields of `GET /repos/{owner}/{repo}` that end up on a card.
#[derive(Debug, Deserialize)]
struct GitHubRepo {
    name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    html_url: String,
}

impl From<GitHubRepo> for RepoSummary {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            language: repo.language.unwrap_or_default(),
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            url: repo.html_url,
        }
    }
}

pub struct GitHubRepoSource {
    client: Client,
    api_url: String,
    owner: String,
}

impl GitHubRepoSource {
    pub fn new(config: &WidgetConfig, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            api_url: config.github_api_url.trim_end_matches('/').to_string(),
            owner: config.github_username.clone(),
        }
    }

    pub fn repo_url(&self, name: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.owner, name)
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers
    }

    pub fn summary_from_bytes(bytes: &[u8]) -> BlogrollResult<RepoSummary> {
        let repo: GitHubRepo = serde_json::from_slice(bytes)?;
        Ok(repo.into())
    }
}

#[async_trait]
impl RepoSource for GitHubRepoSource {
    async fn fetch_repo(&self, name: &str) -> BlogrollResult<RepoSummary> {
        let request = self.client.get(self.repo_url(name)).headers(Self::headers());
        let response = send_checked(request).await?;
        let bytes = response.bytes().await?;

        Self::summary_from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::errors::BlogrollError;
    use crate::services::RepoService;
    use crate::sources::fakes::{serve, REFUSED_URL};
    use crate::storage::{KeyValueStore, SqliteKeyValueStore, SqliteStorage};

    fn config_at(api_url: &str) -> WidgetConfig {
        WidgetConfig {
            github_api_url: api_url.to_string(),
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn test_summary_from_json() {
        let json = br#"{
            "id": 1234,
            "name": "sanction",
            "full_name": "demianbrecht/sanction",
            "description": "A simple OAuth2 client",
            "language": "Python",
            "stargazers_count": 101,
            "forks_count": 23,
            "html_url": "https://github.com/demianbrecht/sanction",
            "private": false
        }"#;

        let summary = GitHubRepoSource::summary_from_bytes(json).unwrap();

        assert_eq!(
            summary,
            RepoSummary {
                name: "sanction".to_string(),
                description: "A simple OAuth2 client".to_string(),
                language: "Python".to_string(),
                star_count: 101,
                fork_count: 23,
                url: "https://github.com/demianbrecht/sanction".to_string(),
            }
        );
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let json = br#"{
            "name": "django-sanction",
            "description": null,
            "language": null,
            "html_url": "https://github.com/demianbrecht/django-sanction"
        }"#;

        let summary = GitHubRepoSource::summary_from_bytes(json).unwrap();

        assert_eq!(summary.description, "");
        assert_eq!(summary.language, "");
        assert_eq!(summary.star_count, 0);
        assert_eq!(summary.fork_count, 0);
    }

    #[test]
    fn test_not_found_body_is_error() {
        let json = br#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
        let result = GitHubRepoSource::summary_from_bytes(json);
        assert!(matches!(result, Err(BlogrollError::Json(_))));
    }

    #[test]
    fn test_repo_url() {
        let config = WidgetConfig {
            github_api_url: "https://api.github.com/".to_string(),
            ..WidgetConfig::default()
        };
        let source = GitHubRepoSource::new(&config, Duration::from_secs(1));

        assert_eq!(
            source.repo_url("sanction"),
            "https://api.github.com/repos/demianbrecht/sanction"
        );
    }

    #[tokio::test]
    async fn test_fetch_repo_from_server() {
        let body = r#"{"name":"sanction","description":"OAuth2","language":"Python","stargazers_count":7,"forks_count":1,"html_url":"https://github.com/demianbrecht/sanction"}"#;
        let config = config_at(&serve("200 OK", body).await);
        let source = GitHubRepoSource::new(&config, Duration::from_secs(5));

        let summary = source.fetch_repo("sanction").await.unwrap();

        assert_eq!(summary.name, "sanction");
        assert_eq!(summary.star_count, 7);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let config = config_at(&serve("503 Service Unavailable", "").await);
        let source = GitHubRepoSource::new(&config, Duration::from_secs(5));

        assert!(matches!(
            source.fetch_repo("sanction").await,
            Err(BlogrollError::HttpStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let source = GitHubRepoSource::new(&config_at(REFUSED_URL), Duration::from_secs(5));

        assert!(matches!(
            source.fetch_repo("sanction").await,
            Err(BlogrollError::Http(_))
        ));
    }

    #[tokio::test]
    async fn test_repo_service_drops_failed_repos() {
        let config = config_at(&serve("404 Not Found", r#"{"message":"Not Found"}"#).await);
        let storage = SqliteStorage::in_memory().unwrap();
        let service = RepoService::new(
            &config,
            Box::new(GitHubRepoSource::new(&config, Duration::from_secs(5))),
            CacheStore::new(SqliteKeyValueStore::new(storage.clone())),
        );

        assert!(service.load_repos().await.is_empty());

        let cached = SqliteKeyValueStore::new(storage).get_item(&config.repos_cache_key);
        assert!(cached.unwrap().is_none());
    }
}
