//! Rendering for the txlens TUI.
//!
//! ```text
//! ┌ header ─────────────────────────────────────┐
//! │ summary (id, block, time, totals, fee)      │
//! ├ inputs ─────────────┬ outputs ──────────────┤
//! │ collapsed rows      │ collapsed rows        │
//! └ footer (key hints) ─┴───────────────────────┘
//! ```

pub mod details;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;

use ratatui::Frame;

use crate::client::TransactionSource;
use crate::state::{App, PopupState};

use layout::ScreenLayout;

/// Draws the whole screen for the current app state.
pub fn render<S: TransactionSource>(app: &App<S>, frame: &mut Frame) {
    let area = frame.area();
    let layout = ScreenLayout::new(area);

    header::render(frame, layout.header, app);
    details::render(frame, &layout, app);
    footer::render(frame, layout.footer, app.get_input_context());

    match &app.ui.popup_state {
        PopupState::None => {}
        PopupState::Message(message) => popups::message::render(frame, area, message),
        PopupState::OpenTransaction { query } => {
            popups::open_transaction::render(frame, area, query);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
