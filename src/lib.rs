//! Aggregates blog posts from Medium and Dev.to, GitHub repository cards and
//! a static achievements list into HTML widget fragments, behind a local
//! time-bounded cache.

pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod render;
pub mod services;
pub mod sources;
pub mod storage;
