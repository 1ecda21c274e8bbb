//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints for the given input context.
#[must_use]
pub const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Details => {
            "q:Quit  /:Open  r:Reload  b:Back  Tab:Focus  ↑↓:Scroll"
        }
        InputContext::OpenPrompt => "Enter:Open  Esc:Cancel",
        InputContext::MessagePopup => "Esc/Enter/Space:Close  q:Quit",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, context: InputContext) {
    let footer = Paragraph::new(hints(context))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
