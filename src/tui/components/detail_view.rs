//! # DetailView Component
//!
//! The details screen body: repository name, counts, description, the
//! language breakdown, and the key hints for opening the repo in a
//! browser or going back.
//!
//! Stateless — everything it shows comes from `DetailsState` props. The
//! language section has three looks: a loading note while the fetch is in
//! flight, the sorted names once loaded, and a quiet "none detected" when
//! the fetch resolved empty (including silently-degraded failures).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::state::DetailsState;
use crate::tui::component::Component;

pub struct DetailView<'a> {
    details: &'a DetailsState,
}

impl<'a> DetailView<'a> {
    pub fn new(details: &'a DetailsState) -> Self {
        Self { details }
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let repo = &self.details.repo;

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                repo.full_name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("by {}", repo.owner.login),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());

        let counts = Style::default().fg(Color::Gray);
        lines.push(Line::from(vec![
            Span::styled(format!("👁 {} watchers", repo.watchers_count), counts),
            Span::raw("   "),
            Span::styled(format!("⑂ {} forks", repo.forks_count), counts),
            Span::raw("   "),
            Span::styled(format!("★ {} stars", repo.stargazers_count), counts),
        ]));
        lines.push(Line::default());

        if let Some(description) = &repo.description {
            lines.push(Line::from(description.as_str()));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "Languages",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        match &self.details.languages {
            None => {
                lines.push(Line::from(Span::styled(
                    "Loading languages…",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Some(languages) if languages.is_empty() => {
                lines.push(Line::from(Span::styled(
                    "No languages detected.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Some(languages) => {
                for (name, _bytes) in languages {
                    lines.push(Line::from(name.as_str()));
                }
            }
        }

        let block = Block::bordered()
            .title(" Repository ")
            .title_bottom(Line::from(" Enter Open in browser  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
