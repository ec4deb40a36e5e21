use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Dev.to")]
    DevTo,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Medium => "Medium",
            SourceType::DevTo => "Dev.to",
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "medium" => Ok(SourceType::Medium),
            "dev.to" | "devto" => Ok(SourceType::DevTo),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A blog post as produced by one of the sources or read back from cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub url: String,
    pub date: DateTime<Utc>,
    pub source: SourceType,
    pub publication: Option<String>,
    #[serde(default)]
    pub pinned: bool,
}

impl Post {
    pub fn new(title: String, url: String, source: SourceType) -> Self {
        Self {
            title,
            url,
            date: DateTime::<Utc>::UNIX_EPOCH,
            source,
            publication: None,
            pinned: false,
        }
    }

    /// Sets the date, falling back to the epoch when the source had none.
    pub fn with_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.date = date.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        self
    }

    pub fn with_publication(mut self, publication: Option<String>) -> Self {
        self.publication = publication;
        self
    }
}
