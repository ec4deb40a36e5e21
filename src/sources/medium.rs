use std::time::Duration;

use async_trait::async_trait;
use feed_rs::parser;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::config::WidgetConfig;
use crate::domain::{Post, SourceType};
use crate::errors::{BlogrollError, BlogrollResult};
use crate::sources::http::{build_client, send_checked};
use crate::sources::traits::PostSource;

/// `medium.com/<publication>/...`, skipping `@user` paths
static PATH_PUBLICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"medium\.com/([^/@][^/]+)/").expect("valid path regex"));

/// `<publication>.medium.com`
static SUBDOMAIN_PUBLICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//([^.]+)\.medium\.com").expect("valid subdomain regex"));

pub struct MediumSource {
    client: Client,
    feed_url: String,
    cors_relay: Option<String>,
}

impl MediumSource {
    pub fn new(config: &WidgetConfig, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            feed_url: config.medium_feed_url.clone(),
            cors_relay: config.cors_relay.clone(),
        }
    }

    /// The feed URL, wrapped in the CORS relay when one is configured
    pub fn request_url(&self) -> String {
        match &self.cors_relay {
            Some(relay) => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(self.feed_url.as_bytes()).collect();
                format!("{}{}", relay, encoded)
            }
            None => self.feed_url.clone(),
        }
    }

    /// Map raw RSS bytes to posts
    pub fn posts_from_bytes(bytes: &[u8]) -> BlogrollResult<Vec<Post>> {
        let parsed = parser::parse(bytes).map_err(|e| BlogrollError::FeedParse(e.to_string()))?;

        let posts = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry.title.map(|t| t.content).unwrap_or_default();
                let url = entry
                    .links
                    .into_iter()
                    .next()
                    .map(|l| l.href)
                    .unwrap_or_default();
                let publication = extract_publication(&url);

                Post::new(title, url, SourceType::Medium)
                    .with_date(entry.published)
                    .with_publication(publication)
            })
            .collect();

        Ok(posts)
    }
}

/// Publication name from a Medium post link, hyphens turned into spaces.
pub fn extract_publication(link: &str) -> Option<String> {
    if let Some(caps) = PATH_PUBLICATION.captures(link) {
        return Some(caps[1].replace('-', " "));
    }

    match SUBDOMAIN_PUBLICATION.captures(link) {
        Some(caps) if &caps[1] != "www" => Some(caps[1].replace('-', " ")),
        _ => None,
    }
}

#[async_trait]
impl PostSource for MediumSource {
    fn source_type(&self) -> SourceType {
        SourceType::Medium
    }

    async fn fetch_posts(&self) -> BlogrollResult<Vec<Post>> {
        let response = send_checked(self.client.get(self.request_url())).await?;
        let bytes = response.bytes().await?;

        Self::posts_from_bytes(&bytes)
    }
}
