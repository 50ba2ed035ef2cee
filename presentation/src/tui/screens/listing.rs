//! Policy listing screen — filtered, sorted catalog with comparison marks

use crate::tui::state::TuiState;
use crate::tui::widgets::comparison::ComparisonWidget;
use poliscope_domain::ComparisonTable;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let policies = state.visible_policies();

    // Comparison pane appears below the list once two policies are picked
    let (list_area, compare_area) = if state.comparison.len() >= 2 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let items: Vec<ListItem> = policies
        .iter()
        .map(|policy| {
            let mark = if state.comparison.contains(&policy.id) {
                Span::styled("[x] ", Style::default().fg(Color::Green))
            } else {
                Span::raw("[ ] ")
            };
            let line = Line::from(vec![
                mark,
                Span::styled(
                    policy.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {}  {} ★  {}",
                    policy.company, policy.rating, policy.price_range
                )),
            ]);
            ListItem::new(line)
        })
        .collect();

    let type_label = state
        .listing_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "All".to_string());
    let title = format!(" {} Policies - {} ", type_label, state.sort.label());

    let mut list_state = ListState::default();
    if !policies.is_empty() {
        list_state.select(Some(state.list_cursor.min(policies.len() - 1)));
    }

    frame.render_stateful_widget(
        List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> "),
        list_area,
        &mut list_state,
    );

    if let Some(compare_area) = compare_area {
        let table = ComparisonTable::build(state.comparison.policies());
        frame.render_widget(ComparisonWidget::new(&table, state.scroll), compare_area);
    } else if policies.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No policies to show.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, list_area.inner(ratatui::layout::Margin::new(2, 2)));
    }
}
