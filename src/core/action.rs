//! # Actions
//!
//! Everything that can happen in reposcout becomes an `Action`.
//! A query settles? That's `Action::QuerySettled`.
//! A background request finishes? That's `Action::SearchCompleted`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No I/O happens here, which is what makes the whole query
//! controller testable without a network:
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Late arrivals
//!
//! Every search request is issued under a fresh sequence number and its
//! completion carries that number back. `update()` discards completions
//! whose number is not the latest, so a slow response for a superseded
//! query can never overwrite newer state. The same applies to language
//! fetches, keyed by repository id instead.

use log::debug;

use crate::core::state::{App, DetailsState, FETCH_ERROR_MESSAGE, SearchState};
use crate::github::Repository;

#[derive(Debug)]
pub enum Action {
    /// The debouncer emitted a settled query value.
    QuerySettled(String),
    /// A background search finished. `Err` carries the underlying error
    /// text for diagnostics; the user always sees the generic message.
    SearchCompleted {
        seq: u64,
        result: Result<Vec<Repository>, String>,
    },
    /// The user opened the details screen for a result row.
    OpenDetails(usize),
    /// A background language fetch finished. Failures arrive as an empty
    /// list; they were already logged where they happened.
    LanguagesLoaded {
        repo_id: u64,
        languages: Vec<(String, u64)>,
    },
    /// The user left the details screen.
    CloseDetails,
    /// The user asked to open the current repository in the browser.
    OpenRepoLink,
    Quit,
}

/// I/O the event loop must perform after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue exactly one search request for `query` under `seq`.
    SpawnSearch { seq: u64, query: String },
    /// Fetch the language breakdown for the repository on screen.
    SpawnLanguageFetch {
        repo_id: u64,
        owner: String,
        name: String,
    },
    /// Open a URL in the platform browser.
    OpenLink(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QuerySettled(query) => {
            app.query = query.clone();
            // Any in-flight request is superseded from this point on,
            // whether or not a new one is issued.
            app.request_seq += 1;

            if query.trim().is_empty() {
                app.search = SearchState::Idle;
                return Effect::None;
            }

            app.search = SearchState::Loading;
            Effect::SpawnSearch {
                seq: app.request_seq,
                query,
            }
        }

        Action::SearchCompleted { seq, result } => {
            if seq != app.request_seq {
                debug!(
                    "Discarding stale search completion (seq={}, latest={})",
                    seq, app.request_seq
                );
                return Effect::None;
            }

            app.search = match result {
                Ok(items) if items.is_empty() => SearchState::NoResults,
                Ok(items) => SearchState::Results(items),
                Err(_) => SearchState::Error(FETCH_ERROR_MESSAGE.to_string()),
            };
            Effect::None
        }

        Action::OpenDetails(index) => {
            let SearchState::Results(items) = &app.search else {
                return Effect::None;
            };
            let Some(repo) = items.get(index) else {
                return Effect::None;
            };

            let repo = repo.clone();
            let effect = Effect::SpawnLanguageFetch {
                repo_id: repo.id,
                owner: repo.owner.login.clone(),
                name: repo.name.clone(),
            };
            app.details = Some(DetailsState {
                repo,
                languages: None,
            });
            effect
        }

        Action::LanguagesLoaded { repo_id, languages } => {
            match &mut app.details {
                // Guard: the fetch result must belong to the repository
                // still on screen.
                Some(details) if details.repo.id == repo_id => {
                    details.languages = Some(languages);
                }
                _ => {
                    debug!("Discarding language fetch for closed details view (repo_id={repo_id})");
                }
            }
            Effect::None
        }

        Action::CloseDetails => {
            app.details = None;
            Effect::None
        }

        Action::OpenRepoLink => match &app.details {
            Some(details) => Effect::OpenLink(details.repo.html_url.clone()),
            None => Effect::None,
        },

        Action::Quit => Effect::Quit,
    }
}
