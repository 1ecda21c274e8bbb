//! Layout calculations.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, SUMMARY_HEIGHT};

/// Areas of the details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub summary: Rect,
    pub inputs: Rect,
    pub outputs: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SUMMARY_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let tables = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        Self {
            header: rows[0],
            summary: rows[1],
            inputs: tables[0],
            outputs: tables[1],
            footer: rows[3],
        }
    }
}

/// Centers a popup of the given size in `parent`, leaving a margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}
