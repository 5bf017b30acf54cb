//! Wire types for the GitHub REST API responses we consume.
//!
//! Only the fields the UI actually renders are deserialized; everything
//! else in GitHub's (large) repository objects is ignored by serde.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level shape of `GET /search/repositories`.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    pub items: Vec<Repository>,
}

/// A single repository search result.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    pub html_url: String,
    /// GitHub sends `null` for repositories without a description.
    pub description: Option<String>,
    pub watchers_count: u64,
    pub forks_count: u64,
    pub stargazers_count: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

/// `GET /repos/{owner}/{name}/languages` returns a flat object mapping
/// language name to byte count. `BTreeMap` keeps deserialization order
/// deterministic.
pub type LanguageMap = BTreeMap<String, u64>;

/// Flattens a language map into a list sorted by byte count, largest first.
/// Ties break alphabetically so rendering is stable across fetches.
pub fn languages_by_size(map: LanguageMap) -> Vec<(String, u64)> {
    let mut langs: Vec<(String, u64)> = map.into_iter().collect();
    langs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    langs
}
