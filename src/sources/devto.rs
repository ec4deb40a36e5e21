use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::WidgetConfig;
use crate::domain::{Post, SourceType};
use crate::errors::{BlogrollError, BlogrollResult};
use crate::sources::http::{build_client, send_checked};
use crate::sources::traits::PostSource;

/// The subset of a Dev.to article object we read.
/// Every field is optional; a malformed article maps to defaults.
#[derive(Debug, Deserialize)]
struct DevToArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

impl DevToArticle {
    fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|date| date.with_timezone(&Utc))
    }
}

pub struct DevToSource {
    client: Client,
    api_url: String,
    username: String,
    page_size: u32,
}

impl DevToSource {
    pub fn new(config: &WidgetConfig, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            api_url: config.devto_api_url.clone(),
            username: config.devto_username.clone(),
            page_size: config.devto_page_size,
        }
    }

    /// `{api}/articles?username=..&per_page=..`
    pub fn request_url(&self) -> BlogrollResult<Url> {
        let mut url = Url::parse(&format!("{}/articles", self.api_url.trim_end_matches('/')))
            .map_err(|e| BlogrollError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("username", &self.username)
            .append_pair("per_page", &self.page_size.to_string());

        Ok(url)
    }

    /// Map a raw JSON article list to posts
    pub fn posts_from_bytes(bytes: &[u8]) -> BlogrollResult<Vec<Post>> {
        let articles: Vec<DevToArticle> = serde_json::from_slice(bytes)?;

        Ok(articles
            .into_iter()
            .map(|article| {
                let published = article.published();
                Post::new(
                    article.title.unwrap_or_default(),
                    article.url.unwrap_or_default(),
                    SourceType::DevTo,
                )
                .with_date(published)
            })
            .collect())
    }
}

#[async_trait]
impl PostSource for DevToSource {
    fn source_type(&self) -> SourceType {
        SourceType::DevTo
    }

    async fn fetch_posts(&self) -> BlogrollResult<Vec<Post>> {
        let url = self.request_url()?;
        let response = send_checked(self.client.get(url)).await?;
        let bytes = response.bytes().await?;

        Self::posts_from_bytes(&bytes)
    }
}
