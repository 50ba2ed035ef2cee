//! Sign-up and login screens (mocked, no real account backend)

use crate::tui::state::TuiState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SIGN_UP_FIELDS: [&str; 3] = ["Name", "Email", "Password"];
pub const LOGIN_FIELDS: [&str; 2] = ["Email", "Password"];

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState, fields: &[&str], title: &str) {
    let mut lines = vec![Line::from("")];

    for (i, label) in fields.iter().enumerate() {
        let value = state.form.values.get(i).map(String::as_str).unwrap_or("");
        let active = state.form.active == i;
        let display = if *label == "Password" {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let marker = if active { "> " } else { "  " };
        let style = if active {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:>9}: ", marker, label), style),
            Span::raw(display),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Tab switches fields, Enter submits. No data leaves this terminal.",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        ),
        area,
    );
}
