//! Transcript widget — the chat conversation

use crate::tui::state::TuiState;
use poliscope_domain::{Sender, PLACEHOLDER_TEXT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct TranscriptWidget<'a> {
    state: &'a TuiState,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for TranscriptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(session) = self.state.sessions.current() {
            for message in session.messages() {
                let (prefix, style) = match message.sender {
                    Sender::User => ("You", Style::default().fg(Color::Cyan)),
                    Sender::Bot => ("Advisor", Style::default().fg(Color::Green)),
                };
                lines.push(Line::from(Span::styled(
                    prefix,
                    style.add_modifier(Modifier::BOLD),
                )));

                if message.text == PLACEHOLDER_TEXT {
                    lines.push(Line::from(Span::styled(
                        "thinking...",
                        Style::default().fg(Color::DarkGray),
                    )));
                } else {
                    for text_line in message.text.lines() {
                        lines.push(Line::from(Span::raw(text_line.to_string())));
                    }
                }

                for follow_up in &message.follow_up_questions {
                    lines.push(Line::from(Span::styled(
                        format!("  ? {}", follow_up),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                lines.push(Line::from(""));
            }
        }

        let title = self
            .state
            .sessions
            .current()
            .map(|s| format!(" {} ", s.title()))
            .unwrap_or_else(|| " Chat ".to_string());

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}
