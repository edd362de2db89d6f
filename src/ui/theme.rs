use ratatui::style::{Color, Modifier, Style};

// Teal accent carried over from the capture app (#24838F), on a dark
// slate base.
pub(crate) const ACCENT: Color = Color::Rgb(36, 131, 143);
pub(crate) const HEADER_BG: Color = Color::Rgb(22, 25, 32);
pub(crate) const HEADER_FG: Color = Color::Rgb(216, 222, 228);
pub(crate) const GREEN: Color = Color::Rgb(110, 181, 106);
pub(crate) const RED: Color = Color::Rgb(207, 97, 97);
pub(crate) const YELLOW: Color = Color::Rgb(224, 187, 95);
pub(crate) const SURFACE: Color = Color::Rgb(33, 37, 46);
pub(crate) const TEXT: Color = Color::Rgb(216, 222, 228);
pub(crate) const TEXT_DIM: Color = Color::Rgb(124, 132, 142);
pub(crate) const OVERLAY: Color = Color::Rgb(60, 66, 78);
pub(crate) const COMMAND_BG: Color = Color::Rgb(17, 19, 25);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Primary currency line in an amount box.
pub(crate) fn amount_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Secondary labels under the primary amount.
pub(crate) fn label_style() -> Style {
    Style::default().fg(ACCENT)
}

pub(crate) fn budget_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn spent_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
