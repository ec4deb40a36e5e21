pub mod achievement;
pub mod pinned;
pub mod post;
pub mod repo;
pub mod title;

pub use achievement::Achievement;
pub use pinned::PinnedArticle;
pub use post::{Post, SourceType};
pub use repo::RepoSummary;
pub use title::normalize_title;
