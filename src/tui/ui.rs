//! Screen layout: composes components into the search and details screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, Header, ResultsList};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    // Details screen replaces the search screen while open; the search
    // state underneath is untouched, so going back is instant.
    if let Some(details) = &app.details {
        DetailView::new(details).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0)]);
    let [header_area, search_area, results_area] = layout.areas(frame.area());

    Header::new(app.authenticated).render(frame, header_area);
    tui.search_bar.render(frame, search_area);
    ResultsList::new(&mut tui.results, &app.search, spinner_frame)
        .render(frame, results_area);
}
