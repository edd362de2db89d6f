use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::BudgetRecord;
use crate::ui::theme;
use crate::ui::util::format_amount;

/// Column layout shared with the header row the budgets screen renders
/// above this table.
pub(crate) const WIDTHS: [Constraint; 4] = [
    Constraint::Length(18),
    Constraint::Length(14),
    Constraint::Length(14),
    Constraint::Min(18),
];

/// Render one row per record, in list order. The caller owns ordering;
/// nothing is sorted or de-duplicated here.
pub(crate) fn render(
    f: &mut Frame,
    area: Rect,
    render_list: &[BudgetRecord],
    cursor: usize,
    scroll: usize,
) {
    if render_list.is_empty() {
        render_empty(f, area);
        return;
    }

    let rows: Vec<Row> = render_list
        .iter()
        .enumerate()
        .skip(scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, rec)| {
            let ratio = if rec.value > Decimal::ZERO {
                (rec.spent / rec.value).to_f64().unwrap_or(0.0).min(1.0)
            } else {
                0.0
            };

            let bar_color = if ratio > 0.9 {
                theme::RED
            } else if ratio > 0.7 {
                theme::YELLOW
            } else {
                theme::GREEN
            };

            let style = if i == cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let bar = progress_bar(ratio, 12);

            Row::new(vec![
                Cell::from(rec.label()),
                Cell::from(Span::styled(format_amount(rec.value), theme::budget_style())),
                Cell::from(Span::styled(format_amount(rec.spent), theme::spent_style())),
                Cell::from(Span::styled(
                    format!("{bar} {:.0}%", ratio * 100.0),
                    Style::default().fg(bar_color),
                )),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, WIDTHS).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Monthly Budgets ({}) ", render_list.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(table, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(Span::styled("No budget months to show", theme::dim_style()))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    " Monthly Budgets ",
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(msg, area);
}

fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
