//! # ResultsList Component
//!
//! The body of the search screen. Renders whichever `SearchState` variant
//! is active — hint text, loading spinner, error, "no results", or the
//! selectable list of repositories.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultsListState` lives in `TuiState`
//! - `ResultsList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::state::{NO_RESULTS_MESSAGE, SearchState};
use crate::github::Repository;
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Events emitted by the results list.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsEvent {
    /// Open the details screen for the result at this index.
    Open(usize),
}

/// Persistent selection state for the results list.
pub struct ResultsListState {
    pub selected: usize,
    len: usize,
    pub list_state: ListState,
}

impl ResultsListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            len: 0,
            list_state: ListState::default(),
        }
    }

    /// Called when a new result set arrives; selection restarts at the top.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    /// Handle a key event, returning a ResultsEvent if the parent should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ResultsEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.len - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(ResultsEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the search screen body.
pub struct ResultsList<'a> {
    state: &'a mut ResultsListState,
    search: &'a SearchState,
    spinner_frame: usize,
}

impl<'a> ResultsList<'a> {
    pub fn new(
        state: &'a mut ResultsListState,
        search: &'a SearchState,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            search,
            spinner_frame,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.search {
            SearchState::Idle => {
                render_centered(
                    frame,
                    area,
                    "Type to search GitHub repositories",
                    Style::default().fg(Color::DarkGray),
                );
            }
            SearchState::Loading => {
                let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                render_centered(
                    frame,
                    area,
                    &format!("{spinner} Loading…"),
                    Style::default().fg(Color::Cyan),
                );
            }
            SearchState::NoResults => {
                render_centered(
                    frame,
                    area,
                    NO_RESULTS_MESSAGE,
                    Style::default().fg(Color::Yellow),
                );
            }
            SearchState::Error(message) => {
                render_centered(frame, area, message, Style::default().fg(Color::Red));
            }
            SearchState::Results(items) => self.render_items(frame, area, items),
        }
    }

    fn render_items(&mut self, frame: &mut Frame, area: Rect, items: &[Repository]) {
        let width = area.width.saturating_sub(2) as usize;

        let rows: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, repo)| {
                let selected = i == self.state.selected;
                let name_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let name = Line::from(vec![
                    Span::styled("◉ ", Style::default().fg(Color::Cyan)),
                    Span::styled(truncate_to_width(&repo.full_name, width), name_style),
                ]);

                let description = repo.description.as_deref().unwrap_or("");
                let description = Line::from(Span::styled(
                    format!("  {}", truncate_to_width(description, width)),
                    Style::default().fg(Color::Gray),
                ));

                ListItem::new(vec![name, description, Line::default()])
            })
            .collect();

        let list = List::new(rows);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn render_centered(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    // Vertically centered single line.
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1);
    frame.render_widget(paragraph, line_area);
}

/// Truncate a string to fit within `max_width` display columns, adding "…"
/// if anything was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_repo;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(search: &SearchState, state: &mut ResultsListState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ResultsList::new(state, search, 0).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_shows_hint() {
        let mut state = ResultsListState::new();
        let text = render_to_text(&SearchState::Idle, &mut state);
        assert!(text.contains("Type to search"));
    }

    #[test]
    fn test_loading_shows_spinner() {
        let mut state = ResultsListState::new();
        let text = render_to_text(&SearchState::Loading, &mut state);
        assert!(text.contains("Loading"));
    }

    #[test]
    fn test_no_results_shows_message() {
        let mut state = ResultsListState::new();
        let text = render_to_text(&SearchState::NoResults, &mut state);
        assert!(text.contains("No results found."));
    }

    #[test]
    fn test_error_shows_message() {
        let mut state = ResultsListState::new();
        let search = SearchState::Error("Failed to fetch data. Please try again.".to_string());
        let text = render_to_text(&search, &mut state);
        assert!(text.contains("Failed to fetch data"));
    }

    #[test]
    fn test_results_show_names_and_descriptions() {
        let mut state = ResultsListState::new();
        state.reset(2);
        let search = SearchState::Results(vec![
            test_repo(1, "facebook/react"),
            test_repo(2, "vuejs/vue"),
        ]);
        let text = render_to_text(&search, &mut state);
        assert!(text.contains("facebook/react"));
        assert!(text.contains("vuejs/vue"));
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = ResultsListState::new();
        state.reset(2);

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
        // Clamped at the bottom.
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_submit_opens_selected_row() {
        let mut state = ResultsListState::new();
        state.reset(3);
        state.handle_event(&TuiEvent::CursorDown);

        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ResultsEvent::Open(1))
        );
    }

    #[test]
    fn test_empty_list_ignores_events() {
        let mut state = ResultsListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 20), "short");
        assert_eq!(truncate_to_width("a very long repository name", 10), "a very lo…");
    }
}
