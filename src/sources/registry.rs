use std::time::Duration;

use futures::future::join_all;

use crate::config::WidgetConfig;
use crate::domain::Post;
use crate::sources::traits::PostSource;
use crate::sources::{devto::DevToSource, medium::MediumSource};

pub struct SourceRegistry {
    sources: Vec<Box<dyn PostSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// The configured sources. Registration order is concatenation order
    pub fn from_config(config: &WidgetConfig, timeout: Duration) -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(MediumSource::new(config, timeout)));
        registry.register(Box::new(DevToSource::new(config, timeout)));

        registry
    }

    pub fn register(&mut self, source: Box<dyn PostSource>) {
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fetch every source concurrently and wait for all of them to settle.
    /// One batch per source, in registration order; a failed source yields an empty batch.
    pub async fn fetch_all(&self) -> Vec<Vec<Post>> {
        join_all(self.sources.iter().map(|source| source.fetch())).await
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
