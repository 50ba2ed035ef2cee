//! Input widget — single-line text entry with cursor

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
    title: &'a str,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState, title: &'a str) -> Self {
        Self { state, title }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.state.mode {
            InputMode::Insert => Style::default().fg(Color::Green),
            InputMode::Normal => Style::default().fg(Color::DarkGray),
        };

        let cursor = self.state.input_cursor.min(self.state.input.len());
        let (before, after) = self.state.input.split_at(cursor);
        let mut spans = vec![Span::raw(before)];
        if self.state.mode == InputMode::Insert {
            let (cursor_char, rest) = match after.chars().next() {
                Some(c) => (c.to_string(), &after[c.len_utf8()..]),
                None => (" ".to_string(), after),
            };
            spans.push(Span::styled(
                cursor_char,
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            spans.push(Span::raw(rest));
        } else if self.state.input.is_empty() {
            spans = vec![Span::styled(
                "press i to type",
                Style::default().fg(Color::DarkGray),
            )];
        } else {
            spans = vec![Span::raw(self.state.input.as_str())];
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", self.title)),
            )
            .render(area, buf);
    }
}
