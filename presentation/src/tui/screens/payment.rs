//! Payment screen (mocked checkout, no real charge)

use crate::tui::state::{TuiState, PAYMENT_PRICING};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let selected_count = state.comparison.len().clamp(1, PAYMENT_PRICING.len());
    let (price, plan) = state.payment_plan();

    let mut lines = vec![
        Line::from("Comparing more policies unlocks the premium comparison table."),
        Line::from(""),
    ];

    for (i, (tier_price, tier_plan)) in PAYMENT_PRICING.iter().enumerate() {
        let active = i + 1 == selected_count;
        let marker = if active { ">" } else { " " };
        let style = if active {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(
                "  {} {} policies  {:>12}  {}",
                marker,
                i + 1,
                if *tier_price == 0 {
                    "Free".to_string()
                } else {
                    format!("{} / month", tier_price)
                },
                tier_plan
            ),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Your selection: "),
        Span::styled(
            format!("{} ({} selected)", plan, state.comparison.len()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    if price == 0 {
        lines.push(Line::from("Single-policy comparison is free. Press Enter to continue."));
    } else {
        lines.push(Line::from(format!(
            "Press Enter to pay {} (mock, no card required).",
            price
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Payment ")),
        area,
    );
}
