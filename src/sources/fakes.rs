// In-process sources for service and registry tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::domain::{Post, RepoSummary, SourceType};
use crate::errors::{BlogrollError, BlogrollResult};
use crate::sources::traits::{PostSource, RepoSource};

/// A post dated `day` days into 2024.
pub fn post(title: &str, source: SourceType, day: i64) -> Post {
    let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(day);
    Post::new(
        title.to_string(),
        format!("https://example.com/{}", day),
        source,
    )
    .with_date(Some(date))
}

pub struct FakePostSource {
    source_type: SourceType,
    posts: Option<Vec<Post>>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl FakePostSource {
    pub fn ok(source_type: SourceType, posts: Vec<Post>) -> Self {
        Self {
            source_type,
            posts: Some(posts),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(source_type: SourceType) -> Self {
        Self {
            posts: None,
            ..Self::ok(source_type, Vec::new())
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PostSource for FakePostSource {
    fn source_type(&self) -> SourceType {
        self.source_type
    }

    async fn fetch_posts(&self) -> BlogrollResult<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.posts.clone().ok_or(BlogrollError::HttpStatus {
            url: format!("https://{}.invalid/", self.source_type),
            status: 503,
        })
    }
}

#[derive(Default)]
pub struct FakeRepoSource {
    repos: HashMap<String, RepoSummary>,
    calls: Arc<AtomicUsize>,
}

impl FakeRepoSource {
    pub fn with_repo(mut self, name: &str, stars: u64) -> Self {
        self.repos.insert(
            name.to_string(),
            RepoSummary {
                name: name.to_string(),
                description: format!("{} description", name),
                language: "Python".to_string(),
                star_count: stars,
                fork_count: stars / 2,
                url: format!("https://github.com/demianbrecht/{}", name),
            },
        );
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RepoSource for FakeRepoSource {
    async fn fetch_repo(&self, name: &str) -> BlogrollResult<RepoSummary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.repos.get(name).cloned().ok_or(BlogrollError::HttpStatus {
            url: format!("https://api.github.com/repos/demianbrecht/{}", name),
            status: 404,
        })
    }
}

/// Nothing listens on port 1, so connecting is refused.
pub const REFUSED_URL: &str = "http://127.0.0.1:1";

/// Local HTTP server answering every request with `status` and `body`.
/// Returns its base URL.
pub async fn serve(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}
