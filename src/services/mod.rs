pub mod aggregation;
pub mod post_service;
pub mod repo_service;

pub use post_service::PostService;
pub use repo_service::RepoService;
