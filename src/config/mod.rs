use std::time::Duration;

use crate::domain::{Achievement, PinnedArticle, SourceType};
use crate::errors::{BlogrollError, BlogrollResult};

/// Default transport timeout for every outgoing request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Compiled-in widget constants, injected into sources and services.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub medium_feed_url: String,
    /// Prefix prepended to the url-encoded Medium feed URL, if any.
    pub cors_relay: Option<String>,
    pub devto_api_url: String,
    pub devto_username: String,
    pub devto_page_size: u32,
    pub github_api_url: String,
    pub github_username: String,
    pub pinned_repos: Vec<String>,
    pub pinned_articles: Vec<PinnedArticle>,
    pub achievements: Vec<Achievement>,
    pub max_posts: usize,
    pub posts_cache_key: String,
    pub repos_cache_key: String,
    pub cache_ttl: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            medium_feed_url: "https://medium.com/feed/@demianbrecht".to_string(),
            cors_relay: None,
            devto_api_url: "https://dev.to/api".to_string(),
            devto_username: "demianbrecht".to_string(),
            devto_page_size: 5,
            github_api_url: "https://api.github.com".to_string(),
            github_username: "demianbrecht".to_string(),
            pinned_repos: vec![
                "django-declarative-apis".to_string(),
                "sanction".to_string(),
                "django-sanction".to_string(),
            ],
            // Add articles here to pin them to the top
            pinned_articles: vec![PinnedArticle::new(
                "Inner Sourcing: What's this?",
                SourceType::Medium,
            )],
            achievements: default_achievements(),
            max_posts: 5,
            posts_cache_key: "demianbrecht_posts".to_string(),
            repos_cache_key: "demianbrecht_repos".to_string(),
            cache_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new("Pull Shark", Some("x3"), "Opened pull requests that have been merged"),
        Achievement::new("Starstruck", Some("x2"), "Created a repository that has many stars"),
        Achievement::new(
            "Pair Extraordinaire",
            None,
            "Coauthored commits on merged pull requests",
        ),
        Achievement::new(
            "Quickdraw",
            None,
            "Closed an issue or pull request within 5 minutes of opening",
        ),
        Achievement::new(
            "Arctic Code Vault Contributor",
            None,
            "Contributed code to repositories archived in the 2020 Arctic Code Vault",
        ),
        Achievement::new(
            "Mars 2020 Contributor",
            None,
            "Contributed code to repositories used in the Mars 2020 Helicopter Mission",
        ),
    ]
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub cache_path: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> BlogrollResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let cache_path = std::env::var("BLOGROLL_CACHE_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("blogroll.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./blogroll.db".to_string())
        });

        let http_timeout = match std::env::var("BLOGROLL_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Self::parse_timeout(&raw)?,
            Err(_) => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            cache_path,
            http_timeout,
        })
    }

    fn parse_timeout(raw: &str) -> BlogrollResult<Duration> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(BlogrollError::Config(format!(
                "BLOGROLL_HTTP_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                raw
            ))),
        }
    }
}
