//! Policy advisor chat screen — transcript, suggestion carousel, history

use crate::tui::state::TuiState;
use crate::tui::widgets::transcript::TranscriptWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let (sidebar_area, main_area) = if state.show_history_sidebar {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(20)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    if let Some(sidebar_area) = sidebar_area {
        render_history(frame, sidebar_area, state);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(main_area);

    frame.render_widget(TranscriptWidget::new(state), chunks[0]);
    render_carousel(frame, chunks[1], state);
}

fn render_history(frame: &mut Frame, area: Rect, state: &TuiState) {
    let current = state.sessions.current_id();
    let items: Vec<ListItem> = state
        .sessions
        .ids()
        .iter()
        .map(|id| {
            let title = state
                .sessions
                .get(id)
                .map(|s| s.title().to_string())
                .unwrap_or_default();
            let style = if Some(id.as_str()) == current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(title, style)))
        })
        .collect();

    let mut list_state = ListState::default();
    if !state.sessions.is_empty() {
        list_state.select(Some(state.history_cursor.min(state.sessions.len() - 1)));
    }

    frame.render_stateful_widget(
        List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" History "))
            .highlight_symbol("> "),
        area,
        &mut list_state,
    );
}

fn render_carousel(frame: &mut Frame, area: Rect, state: &TuiState) {
    let line = match state.carousel.current() {
        Some(question) => Line::from(vec![
            Span::styled("< ", Style::default().fg(Color::DarkGray)),
            Span::styled(question.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(" >", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "  ({}/{})",
                    state.carousel.position() + 1,
                    state.carousel.len()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(""),
    };

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Suggested (s to use) "),
        ),
        area,
    );
}
