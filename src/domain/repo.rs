use serde::{Deserialize, Serialize};

/// Repository card data, one per configured repository name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: String,
    pub language: String,
    pub star_count: u64,
    pub fork_count: u64,
    pub url: String,
}
