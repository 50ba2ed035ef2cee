//! Policy details screen — one policy in full

use crate::tui::state::TuiState;
use poliscope_domain::FeatureCategory;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let Some(policy) = state.selected_policy() else {
        frame.render_widget(
            Paragraph::new("Policy not found.")
                .block(Block::default().borders(Borders::ALL).title(" Details ")),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            policy.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(policy.company.clone()),
        Line::from(""),
        Line::from(policy.short_description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Price: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(policy.price_range.clone()),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "{} ★ ({} reviews)",
                policy.rating, policy.reviews_count
            )),
        ]),
    ];

    if let Some(uin) = &policy.product_uin {
        lines.push(Line::from(vec![
            Span::styled("UIN: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(uin.clone()),
        ]));
    }

    for category in FeatureCategory::all() {
        let features = policy.features(category);
        if features.is_empty() {
            continue;
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            category.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for feature in features {
            lines.push(Line::from(format!("  - {}", feature)));
        }
    }

    let comparing = if state.comparison.contains(&policy.id) {
        " [in comparison] "
    } else {
        " "
    };
    let title = format!(" {} Details{}", policy.policy_type, comparing);

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .scroll((state.scroll, 0)),
        area,
    );
}
