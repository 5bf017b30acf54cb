//! GitHub REST API integration: the client and the wire types it returns.

mod client;
pub mod types;

pub use client::{ApiError, GithubClient};
pub use types::{LanguageMap, Owner, Repository, SearchResponse, languages_by_size};
