//! # SearchBar Component
//!
//! Single-line text input for the repository query.
//!
//! ## Responsibilities
//!
//! - Capture typed characters, paste, and backspace
//! - Emit `SearchEvent::Changed` on every edit so the debouncer sees the
//!   raw keystroke stream
//! - Show a placeholder when empty
//!
//! The buffer is internal state; the parent never mutates it directly.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search";

/// High-level events emitted by the SearchBar.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The buffer content changed; carries the full new value.
    Changed(String),
}

pub struct SearchBar {
    buffer: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };

        frame.render_widget(paragraph.block(block), area);

        // Cursor sits after the text, inside the border.
        let cursor_x = area.x + 1 + self.buffer.width() as u16;
        frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Queries are single-line; flatten pasted newlines.
                for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
                    self.buffer.push(c);
                }
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop().map(|_| SearchEvent::Changed(self.buffer.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_changed_with_full_value() {
        let mut bar = SearchBar::new();

        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('r')),
            Some(SearchEvent::Changed("r".to_string()))
        );
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('u')),
            Some(SearchEvent::Changed("ru".to_string()))
        );
        assert_eq!(bar.text(), "ru");
    }

    #[test]
    fn test_backspace_on_empty_emits_nothing() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_backspace_to_empty_emits_empty_value() {
        let mut bar = SearchBar::new();
        bar.handle_event(&TuiEvent::InputChar('a'));

        // Clearing the box is a real change: it settles into "clear results".
        assert_eq!(
            bar.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed(String::new()))
        );
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut bar = SearchBar::new();
        let event = bar.handle_event(&TuiEvent::Paste("rust\nlang".to_string()));
        assert_eq!(event, Some(SearchEvent::Changed("rustlang".to_string())));
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = SearchBar::new();

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Search"));
    }

    #[test]
    fn test_render_shows_buffer_content() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = SearchBar::new();
        bar.handle_event(&TuiEvent::InputChar('x'));
        bar.handle_event(&TuiEvent::InputChar('y'));

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("xy"));
        assert!(!text.contains("Search"));
    }
}
