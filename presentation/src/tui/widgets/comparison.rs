//! Comparison table widget
//!
//! Renders a [`ComparisonTable`] with the feature label column on the
//! left and one column per policy. Column widths follow a fixed lookup
//! keyed by policy count so narrow selections get wider cells.

use poliscope_domain::ComparisonTable;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

/// (feature column %, per-policy column %) by policy count
pub fn column_widths(policy_count: usize) -> (u16, u16) {
    match policy_count {
        0 | 1 => (50, 50),
        2 => (33, 25),
        3 => (40, 20),
        4 => (33, 16),
        _ => (33, 13),
    }
}

pub struct ComparisonWidget<'a> {
    table: &'a ComparisonTable,
    scroll: u16,
}

impl<'a> ComparisonWidget<'a> {
    pub fn new(table: &'a ComparisonTable, scroll: u16) -> Self {
        Self { table, scroll }
    }
}

impl<'a> Widget for ComparisonWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.table.policy_count();
        let (feature_pct, policy_pct) = column_widths(count);

        let mut widths = vec![Constraint::Percentage(feature_pct)];
        widths.extend(std::iter::repeat_n(Constraint::Percentage(policy_pct), count));

        let header_cells: Vec<Cell> = std::iter::once(Cell::from("Feature"))
            .chain(self.table.headers.iter().map(|(name, company)| {
                Cell::from(format!("{}\n{}", name, company))
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            }))
            .collect();
        let header = Row::new(header_cells).height(2);

        let mut rows: Vec<Row> = Vec::new();
        for scalar in &self.table.scalar_rows {
            let cells = std::iter::once(
                Cell::from(scalar.label).style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .chain(scalar.values.iter().map(|v| Cell::from(v.as_str())));
            rows.push(Row::new(cells.collect::<Vec<_>>()));
        }

        for section in &self.table.sections {
            if section.rows.is_empty() {
                continue;
            }
            rows.push(
                Row::new(vec![Cell::from(section.category.label()).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )]),
            );
            for list_row in &section.rows {
                let cells = std::iter::once(Cell::from(format!("  {}", list_row.label)))
                    .chain(list_row.cells.iter().map(|cell| {
                        let display = cell.display();
                        let style = match display {
                            "\u{2713}" => Style::default().fg(Color::Green),
                            "-" => Style::default().fg(Color::DarkGray),
                            _ => Style::default(),
                        };
                        Cell::from(display.to_string()).style(style)
                    }));
                rows.push(Row::new(cells.collect::<Vec<_>>()));
            }
        }

        let visible = rows.into_iter().skip(self.scroll as usize);
        Table::new(visible, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Comparison "),
            )
            .render(area, buf);
    }
}
