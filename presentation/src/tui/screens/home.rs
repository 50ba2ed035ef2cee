//! Home screen — policy type and budget selection

use crate::tui::state::TuiState;
use poliscope_domain::PolicyType;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Find the right insurance policy",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("What type of insurance are you looking for?"),
        Line::from(""),
    ];

    for (i, policy_type) in PolicyType::all().into_iter().enumerate() {
        let selected = state.selected_type == Some(policy_type);
        let marker = if selected { ">" } else { " " };
        let style = if selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {} [{}] {} Insurance", marker, i + 1, policy_type),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Yearly budget: "),
        Span::styled(
            format!("{}", state.budget),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (+/- to adjust)", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    match state.selected_type {
        Some(policy_type) => lines.push(Line::from(format!(
            "Press Enter to browse {} policies, or c to ask the advisor.",
            policy_type
        ))),
        None => lines.push(Line::from(Span::styled(
            "Pick a type with 1, 2 or 3, or press c to chat with the advisor.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Welcome ")),
        area,
    );
}
