use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::{Post, RepoSummary, SourceType};
use crate::errors::BlogrollResult;

#[async_trait]
pub trait PostSource: Send + Sync {
    /// Identifies this source type
    fn source_type(&self) -> SourceType;

    /// One request against the source, mapped to posts
    async fn fetch_posts(&self) -> BlogrollResult<Vec<Post>>;

    /// Like `fetch_posts`, but a failed source reports nothing
    async fn fetch(&self) -> Vec<Post> {
        match self.fetch_posts().await {
            Ok(posts) => {
                debug!(source = %self.source_type(), count = posts.len(), "fetched posts");
                posts
            }
            Err(e) => {
                error!(source = %self.source_type(), error = %e, "post fetch failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetch metadata for one repository by name
    async fn fetch_repo(&self, name: &str) -> BlogrollResult<RepoSummary>;
}
