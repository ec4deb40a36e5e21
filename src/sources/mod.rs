pub mod devto;
pub mod github;
pub mod http;
pub mod medium;
pub mod registry;
pub mod traits;

pub use devto::DevToSource;
pub use github::GitHubRepoSource;
pub use medium::MediumSource;
pub use registry::SourceRegistry;
pub use traits::{PostSource, RepoSource};

#[cfg(test)]
pub(crate) mod fakes;
