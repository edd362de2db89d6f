use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::widgets::budget_table;

/// The budgets page: one fixed header row describing the columns, then
/// the record table underneath.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Column header
            Constraint::Min(3),    // Table
        ])
        .split(area);

    render_header(f, chunks[0]);
    budget_table::render(
        f,
        chunks[1],
        &app.budgets,
        app.budget_index,
        app.budget_scroll,
    );
}

fn render_header(f: &mut Frame, area: Rect) {
    let cells = [
        Cell::from(Span::styled(" Month", theme::header_style())),
        Cell::from(Line::from(vec![
            Span::styled("▲ ", Style::default().fg(theme::GREEN).bg(theme::ACCENT)),
            Span::styled("Budgeted", theme::header_style()),
        ])),
        Cell::from(Line::from(vec![
            Span::styled("▼ ", Style::default().fg(theme::RED).bg(theme::ACCENT)),
            Span::styled("Spent", theme::header_style()),
        ])),
        Cell::from(""),
    ];

    // A one-row table so the header lines up with the body columns.
    let header = Table::new(
        vec![Row::new(cells).style(Style::default().bg(theme::ACCENT))],
        budget_table::WIDTHS,
    );
    f.render_widget(header, area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::sample::sample_budgets;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), app)).unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_single_header_row() {
        let app = App::new(sample_budgets());
        let rows = draw_rows(&app, 80, 16);
        let headers = rows
            .iter()
            .filter(|r| r.contains("Month") && r.contains("Budgeted") && r.contains("Spent"))
            .count();
        assert_eq!(headers, 1);
        assert!(rows[0].contains("Month"));
    }

    #[test]
    fn test_one_row_per_sample_record() {
        let app = App::new(sample_budgets());
        // Tall enough for all ten records.
        let rows = draw_rows(&app, 80, 16);
        let record_rows = rows.iter().filter(|r| r.contains("2021")).count();
        assert_eq!(record_rows, 10);
    }

    #[test]
    fn test_rows_keep_given_order() {
        let app = App::new(sample_budgets());
        let rows = draw_rows(&app, 80, 16);
        let december = rows.iter().position(|r| r.contains("December")).unwrap();
        let october = rows.iter().position(|r| r.contains("October")).unwrap();
        let january = rows.iter().position(|r| r.contains("January")).unwrap();
        assert!(december < october);
        assert!(october < january);
    }

    #[test]
    fn test_amounts_rendered_for_first_record() {
        let app = App::new(sample_budgets());
        let rows = draw_rows(&app, 80, 16);
        let december = rows.iter().find(|r| r.contains("December")).unwrap();
        assert!(december.contains("$200.27"));
        assert!(december.contains("$100.99"));
    }
}
