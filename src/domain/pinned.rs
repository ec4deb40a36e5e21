use super::title::normalize_title;
use super::{Post, SourceType};

/// A post forced to the top of the list regardless of its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedArticle {
    pub title: String,
    pub source: SourceType,
}

impl PinnedArticle {
    pub fn new(title: impl Into<String>, source: SourceType) -> Self {
        Self {
            title: title.into(),
            source,
        }
    }

    /// Normalized title equality plus exact source equality.
    pub fn matches(&self, post: &Post) -> bool {
        self.source == post.source && normalize_title(&self.title) == normalize_title(&post.title)
    }
}
