//! Upload document screen (mocked, records the name only)

use crate::tui::state::TuiState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let value = state.form.values.first().map(String::as_str).unwrap_or("");

    let mut lines = vec![
        Line::from("Name the policy document you want the advisor to consider:"),
        Line::from(""),
        Line::from(vec![
            Span::raw("  File name: "),
            Span::styled(value, Style::default().fg(Color::Green)),
        ]),
        Line::from(""),
    ];

    if let Some(doc) = &state.uploaded_document {
        lines.push(Line::from(vec![
            Span::raw("Currently uploaded: "),
            Span::styled(doc.clone(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "The document is only referenced by name; nothing is read from disk.",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Upload Document "),
        ),
        area,
    );
}
