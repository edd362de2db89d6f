//! Receipt preview modal.
//!
//! The modal owns no state. Visibility and the image source reference
//! live on the `App`; [`apply`] is the only place they change.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme;
use crate::ui::util::truncate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreviewAction {
    /// Close the modal, keep the stored image reference.
    Save,
    /// Close the modal and clear the stored image reference.
    Delete,
    /// Close without touching anything (Esc).
    Dismiss,
}

/// Apply a modal action to the caller-owned state.
pub(crate) fn apply(action: PreviewAction, visible: &mut bool, image: &mut String) {
    *visible = false;
    if action == PreviewAction::Delete {
        image.clear();
    }
}

/// Centered popup with an image slot and the Save/Delete actions. The
/// slot only exists while `image` is non-empty; an empty reference means
/// "no image".
pub(crate) fn render(f: &mut Frame, area: Rect, image: &str) {
    let popup_width = 50.min(area.width.saturating_sub(4));
    let base_height: u16 = if image.is_empty() { 6 } else { 10 };
    let popup_height = base_height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(
            " Receipt Preview ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme::HEADER_BG));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if !image.is_empty() {
        render_image_slot(f, chunks[0], image);
    }

    let buttons = Line::from(vec![
        Span::styled("[", theme::dim_style()),
        Span::styled(
            "s",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("] ", theme::dim_style()),
        Span::styled("Save", theme::normal_style()),
        Span::raw("    "),
        Span::styled("[", theme::dim_style()),
        Span::styled(
            "d",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("] ", theme::dim_style()),
        Span::styled("Delete", theme::normal_style()),
        Span::raw("    "),
        Span::styled("Esc close", theme::dim_style()),
    ]);
    f.render_widget(Paragraph::new(buttons).centered(), chunks[1]);
}

fn render_image_slot(f: &mut Frame, area: Rect, image: &str) {
    let max = area.width.saturating_sub(4) as usize;
    let text = Paragraph::new(vec![
        Line::from(Span::styled(truncate(image, max), theme::normal_style())),
        Line::from(Span::styled(
            format!("{} chars", image.len()),
            theme::dim_style(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Image ", theme::dim_style())),
    );
    f.render_widget(text, area);
}
