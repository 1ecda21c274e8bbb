//! Failure popup shown over the details screen.
//!
//! The text comes from the app's error renderer and may be a single very
//! long line (a raw error page), so sizing never trusts the message length.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::{ERROR_COLOR, MUTED_COLOR};
use crate::ui::layout::centered_popup_area;

const MIN_WIDTH: u16 = 40;

/// Borders plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;

/// Borders plus the blank line above the message.
const VERTICAL_CHROME: u16 = 3;

const HELP: &str = " Esc/Enter/Space:Close  q:Quit ";

/// Popup width and height for `message` inside `area`.
///
/// Width grows with the longest line up to 80% of `area`; height grows
/// with the number of wrapped lines at that width.
#[must_use]
pub fn popup_size(area: Rect, message: &str) -> (u16, u16) {
    let longest = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest = u16::try_from(longest).unwrap_or(u16::MAX);

    let max_width = area.width.saturating_mul(8) / 10;
    let width = MIN_WIDTH
        .max(longest.saturating_add(HORIZONTAL_CHROME))
        .min(max_width);

    let text_width = usize::from(width.saturating_sub(HORIZONTAL_CHROME).max(1));
    let wrapped = message
        .lines()
        .map(|line| line.chars().count().div_ceil(text_width).max(1))
        .sum::<usize>()
        .max(1);
    let height = u16::try_from(wrapped)
        .unwrap_or(u16::MAX)
        .saturating_add(VERTICAL_CHROME);

    (width, height)
}

pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let (width, height) = popup_size(area, message);
    let popup_area = centered_popup_area(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(ERROR_COLOR))
        .title(
            Line::styled(
                " Error ",
                Style::default()
                    .fg(ERROR_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
        )
        .title_bottom(Line::styled(HELP, Style::default().fg(MUTED_COLOR)).centered());

    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    if inner.width <= 2 || inner.height <= 1 {
        return;
    }

    let text_area = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, inner.height - 1);
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, text_area);
}
