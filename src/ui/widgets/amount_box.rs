use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::theme;

/// Boxed amount display: the first field is rendered as a `$`-prefixed
/// currency line, every remaining field as a smaller accent label
/// underneath it, in order.
///
/// Callers must supply at least one field; the first is a bare currency
/// magnitude (e.g. "250.00") and the `$` is added here.
pub(crate) struct AmountBox<'a> {
    fields: &'a [String],
}

impl<'a> AmountBox<'a> {
    pub(crate) fn new(fields: &'a [String]) -> Self {
        Self { fields }
    }
}

impl Widget for AmountBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ACCENT));

        let mut lines = vec![Line::from(Span::styled(
            format!("${}", self.fields[0]),
            theme::amount_style(),
        ))];
        for label in &self.fields[1..] {
            lines.push(Line::from(Span::styled(label.as_str(), theme::label_style())));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render_to_rows(fields: &[String], width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        AmountBox::new(fields).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn text_of(row: &str) -> String {
        row.chars()
            .filter(|c| !matches!(c, '╭' | '╮' | '╰' | '╯' | '│' | '─' | ' '))
            .collect()
    }

    #[test]
    fn test_primary_line_is_dollar_prefixed_first_field() {
        let fields = vec!["250.00".to_string(), "Groceries".into(), "Monthly".into()];
        let rows = render_to_rows(&fields, 24, 6);
        assert!(rows[1].contains("$250.00"), "got: {:?}", rows[1]);
    }

    #[test]
    fn test_secondary_labels_in_order() {
        let fields = vec!["250.00".to_string(), "Groceries".into(), "Monthly".into()];
        let rows = render_to_rows(&fields, 24, 6);
        assert!(rows[2].contains("Groceries"));
        assert!(rows[3].contains("Monthly"));
    }

    #[test]
    fn test_label_count_matches_input() {
        let fields = vec![
            "683.18".to_string(),
            "Remaining".into(),
            "2021".into(),
            "10 months".into(),
        ];
        let rows = render_to_rows(&fields, 24, 8);
        let non_empty = rows.iter().filter(|r| !text_of(r).is_empty()).count();
        // primary + 3 labels
        assert_eq!(non_empty, 4);
    }

    #[test]
    fn test_single_field_renders_no_labels() {
        let fields = vec!["82.74".to_string()];
        let rows = render_to_rows(&fields, 20, 5);
        assert!(rows[1].contains("$82.74"));
        assert!(text_of(&rows[2]).is_empty());
        assert!(text_of(&rows[3]).is_empty());
    }

    #[test]
    fn test_labels_keep_their_text_verbatim() {
        // Only the first field gets the currency treatment.
        let fields = vec!["10.00".to_string(), "82.74".into()];
        let rows = render_to_rows(&fields, 20, 5);
        assert!(rows[1].contains("$10.00"));
        assert!(rows[2].contains("82.74"));
        assert!(!rows[2].contains("$82.74"));
    }
}
