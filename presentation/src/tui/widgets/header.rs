//! Header widget — screen title, subscription badge, fallback banner

use crate::tui::state::{TuiState, FALLBACK_BANNER};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                "poliscope",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.state.screen.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(user) = &self.state.logged_in_user {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(user, Style::default().fg(Color::Green)));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", self.state.subscription),
            Style::default().fg(Color::Magenta),
        ));

        if self.state.catalog_loading {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "loading catalog...",
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.state.from_fallback {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                FALLBACK_BANNER,
                Style::default().fg(Color::Yellow),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
