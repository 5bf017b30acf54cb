//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::github::{Owner, Repository};

/// Creates an App in its startup state (unauthenticated).
pub fn test_app() -> App {
    App::new(false)
}

/// Creates a Repository with plausible values, keyed by id and full name.
/// The owner login and repo name are derived from `full_name` so details
/// fetches address the right endpoint in tests.
pub fn test_repo(id: u64, full_name: &str) -> Repository {
    let (login, name) = full_name.split_once('/').unwrap_or(("owner", full_name));
    Repository {
        id,
        name: name.to_string(),
        full_name: full_name.to_string(),
        owner: Owner {
            login: login.to_string(),
            avatar_url: format!("https://avatars.example.com/{login}.png"),
        },
        html_url: format!("https://github.com/{full_name}"),
        description: Some(format!("Description of {full_name}")),
        watchers_count: 100,
        forks_count: 25,
        stargazers_count: 1234,
    }
}
