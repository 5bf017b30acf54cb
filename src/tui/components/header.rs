//! # Header Component
//!
//! Top bar of the search screen: logo glyph, app title, and an indicator
//! for whether requests are authenticated.
//!
//! Stateless — it receives all data as props and has no internal state,
//! which makes it trivial to test against a `TestBackend`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Top header bar.
///
/// # Props
///
/// - `authenticated`: whether a GitHub token was configured at startup.
///   Shown so users understand why they might hit rate limits.
pub struct Header {
    pub authenticated: bool,
}

impl Header {
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let auth = if self.authenticated {
            Span::styled("authenticated", Style::default().fg(Color::Green))
        } else {
            Span::styled("unauthenticated", Style::default().fg(Color::DarkGray))
        };

        let line = Line::from(vec![
            Span::styled(
                " GitHub Repo Search",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            auth,
        ]);

        frame.render_widget(line, area);
    }
}
