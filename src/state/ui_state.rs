//! UI presentation state: popups and the error renderer they back.

use crate::domain::ExplorerError;

use super::errors::{ErrorRenderer, format_failure};

// ============================================================================
// Popup State
// ============================================================================

/// The popup currently drawn on top of the details screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// A message, usually a rendered fetch failure.
    Message(String),
    /// Prompt for a transaction id to open.
    OpenTransaction { query: String },
}

// ============================================================================
// UI State
// ============================================================================

#[derive(Debug, Default)]
pub struct UiState {
    pub popup_state: PopupState,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state != PopupState::None
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn open_transaction_prompt(&mut self) {
        self.popup_state = PopupState::OpenTransaction {
            query: String::new(),
        };
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    pub fn prompt_input(&mut self, c: char) {
        if let PopupState::OpenTransaction { query } = &mut self.popup_state {
            query.push(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let PopupState::OpenTransaction { query } = &mut self.popup_state {
            query.pop();
        }
    }

    /// Closes the prompt and returns its trimmed query, if non-empty.
    pub fn take_prompt_query(&mut self) -> Option<String> {
        let PopupState::OpenTransaction { query } = &self.popup_state else {
            return None;
        };
        let query = query.trim().to_string();
        self.dismiss_popup();
        (!query.is_empty()).then_some(query)
    }
}

impl ErrorRenderer for UiState {
    fn render_server_errors(&mut self, context: Option<&str>, failure: &ExplorerError) {
        self.show_message(format_failure(context, failure));
    }
}
