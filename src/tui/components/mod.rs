//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, matching how much state a component carries:
//!
//! - **Stateless (props-based)**: `Header`, `DetailView` — receive all
//!   data as props and just render it.
//! - **Stateful (event-driven)**: `SearchBar`, `ResultsList` — keep local
//!   state (text buffer, selection) and emit high-level events the event
//!   loop turns into core actions.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests live together.

pub mod detail_view;
pub mod header;
pub mod results_list;
pub mod search_bar;

pub use detail_view::DetailView;
pub use header::Header;
pub use results_list::{ResultsEvent, ResultsList, ResultsListState};
pub use search_bar::{SearchBar, SearchEvent};
