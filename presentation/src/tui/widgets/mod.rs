//! TUI widgets — ratatui components shared across screens
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Body (flex, screen-specific) ──────────────────┤
//! ├── Input (3, chat and form screens) ──────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod comparison;
pub mod header;
pub mod input;
pub mod status_bar;
pub mod transcript;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout regions for one frame
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub input: Option<Rect>,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute the layout, optionally reserving an input row.
    pub fn compute(area: Rect, with_input: bool) -> Self {
        if with_input {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(area);
            Self {
                header: chunks[0],
                body: chunks[1],
                input: Some(chunks[2]),
                status_bar: chunks[3],
            }
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(1),
                ])
                .split(area);
            Self {
                header: chunks[0],
                body: chunks[1],
                input: None,
                status_bar: chunks[2],
            }
        }
    }

    /// Centered overlay area, as a percentage of the full frame.
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1]);
        horizontal[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_input_has_four_regions() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = MainLayout::compute(area, true);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.unwrap().height, 3);
        assert_eq!(layout.status_bar.height, 1);
    }

    #[test]
    fn test_layout_without_input() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = MainLayout::compute(area, false);
        assert!(layout.input.is_none());
        assert_eq!(layout.body.height, 20);
    }
}
