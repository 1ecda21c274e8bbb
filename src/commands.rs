//! Key event to command mapping.
//!
//! Key handling is a pure function of the key and the current
//! [`InputContext`], so bindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The transaction details screen.
    Details,
    /// The "open transaction" prompt is capturing text.
    OpenPrompt,
    /// A message popup is shown.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Fetch the current transaction again.
    Reload,

    // === Navigation ===
    /// Open the prompt for a new transaction id.
    OpenPrompt,
    /// Show the previously viewed transaction.
    Back,
    /// Switch focus between the inputs and outputs tables.
    CycleFocus,
    ScrollUp,
    ScrollDown,

    // === Popups ===
    Dismiss,
    TypeChar(char),
    Backspace,
    /// Submit the prompt's transaction id.
    Submit,

    Noop,
}

impl AppCommand {
    /// `true` for commands that emit a new route.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::Reload | Self::Back | Self::Submit)
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command for the given context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Details => Self::map_details_keys(key),
            InputContext::OpenPrompt => Self::map_prompt_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    fn map_details_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Reload,
            KeyCode::Char('/') | KeyCode::Char('o') => AppCommand::OpenPrompt,
            KeyCode::Char('b') | KeyCode::Backspace => AppCommand::Back,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::ScrollDown,
            _ => AppCommand::Noop,
        }
    }

    fn map_prompt_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

/// Shorthand for [`KeyMapper::map_key`].
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    KeyMapper::map_key(key, context)
}

// ============================================================================
// Tests
// ============================================================================
