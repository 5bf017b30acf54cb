//! # Application State
//!
//! Core business state for reposcout. This module contains domain state
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── search: SearchState           // what the search screen shows
//! ├── query: String                 // last settled query
//! ├── request_seq: u64              // latest issued search request
//! ├── details: Option<DetailsState> // Some = details screen open
//! └── authenticated: bool           // token configured at startup
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::github::Repository;

/// User-visible message for the zero-items case. Informational, not a failure.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// User-visible message for any transport or parse failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// Everything the search screen can display, as mutually exclusive
/// variants. Invalid combinations (loading while showing an error, etc.)
/// cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No query, or the query settled to empty. Nothing to show.
    Idle,
    /// A request for the latest settled query is in flight.
    Loading,
    /// The latest request succeeded with zero items.
    NoResults,
    /// The latest request failed.
    Error(String),
    /// The latest request succeeded; items keep the response order.
    Results(Vec<Repository>),
}

/// State of the details screen while it is open.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsState {
    pub repo: Repository,
    /// `None` while the language fetch is in flight. A failed fetch
    /// resolves to an empty list, never to a visible error.
    pub languages: Option<Vec<(String, u64)>>,
}

pub struct App {
    pub search: SearchState,
    /// The last settled query, kept for the header/status line.
    pub query: String,
    /// Sequence number of the most recently issued search request.
    /// Completions carrying an older number are discarded.
    pub request_seq: u64,
    pub details: Option<DetailsState>,
    pub authenticated: bool,
}

impl App {
    pub fn new(authenticated: bool) -> Self {
        Self {
            search: SearchState::Idle,
            query: String::new(),
            request_seq: 0,
            details: None,
            authenticated,
        }
    }
}
