use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_magnitude, truncate};
use crate::ui::widgets::AmountBox;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Amount boxes
            Constraint::Length(3), // Receipt status
            Constraint::Min(0),
        ])
        .split(area);

    render_amount_boxes(f, chunks[0], app);
    render_receipt_status(f, chunks[1], app);
}

fn render_amount_boxes(f: &mut Frame, area: Rect, app: &App) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let t = app.totals();
    let months = format!("{} months", app.budgets.len());

    let budgeted = vec![
        format_magnitude(t.value),
        "Budgeted".to_string(),
        months.clone(),
    ];
    let spent = vec![format_magnitude(t.spent), "Spent".to_string(), months];

    let remaining = t.remaining();
    let label = if remaining < Decimal::ZERO {
        "Overspent"
    } else {
        "Remaining"
    };
    let balance = vec![
        format_magnitude(remaining),
        label.to_string(),
        "2021".to_string(),
    ];

    f.render_widget(AmountBox::new(&budgeted), boxes[0]);
    f.render_widget(AmountBox::new(&spent), boxes[1]);
    f.render_widget(AmountBox::new(&balance), boxes[2]);
}

fn render_receipt_status(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.receipt_image.is_empty() {
        Line::from(Span::styled(
            "No receipt attached. Use :attach, then p to preview",
            theme::dim_style(),
        ))
    } else {
        Line::from(vec![
            Span::styled("Receipt: ", theme::normal_style()),
            Span::styled(
                truncate(&app.receipt_image, 36),
                Style::default().fg(theme::ACCENT),
            ),
            Span::styled("  (p to preview)", theme::dim_style()),
        ])
    };

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(status, area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::sample::sample_budgets;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(90, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), app)).unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
                    + "\n"
            })
            .collect()
    }

    #[test]
    fn test_totals_shown_as_currency() {
        let app = App::new(sample_budgets());
        let content = draw(&app);
        assert!(content.contains("$2,671.65"));
        assert!(content.contains("$1,988.47"));
        assert!(content.contains("$683.18"));
        assert!(content.contains("Remaining"));
    }

    #[test]
    fn test_receipt_hint_when_none_attached() {
        let app = App::new(sample_budgets());
        let content = draw(&app);
        assert!(content.contains("No receipt attached"));
    }

    #[test]
    fn test_receipt_reference_shown_when_attached() {
        let mut app = App::new(sample_budgets());
        app.receipt_image = "receipt-042.png".to_string();
        let content = draw(&app);
        assert!(content.contains("receipt-042.png"));
        assert!(!content.contains("No receipt attached"));
    }
}
