use serde::{Deserialize, Serialize};

/// A hand-maintained GitHub achievement badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub tier: Option<String>,
    pub description: String,
}

impl Achievement {
    pub fn new(name: &str, tier: Option<&str>, description: &str) -> Self {
        Self {
            name: name.to_string(),
            tier: tier.map(str::to_string),
            description: description.to_string(),
        }
    }
}
