//! Navigation state: focused pane, scroll offsets and route history.

use super::route::RouteHistory;

// ============================================================================
// Pane
// ============================================================================

/// The rows table that receives scroll keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Inputs,
    Outputs,
}

impl Pane {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Inputs => Self::Outputs,
            Self::Outputs => Self::Inputs,
        }
    }
}

// ============================================================================
// Navigation State
// ============================================================================

#[derive(Debug, Default)]
pub struct NavigationState {
    pub focus: Pane,
    pub input_scroll: usize,
    pub output_scroll: usize,
    pub history: RouteHistory,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets scroll positions, used when a new transaction is shown.
    pub fn reset_scroll(&mut self) {
        self.input_scroll = 0;
        self.output_scroll = 0;
        self.focus = Pane::Inputs;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn scroll_up(&mut self) {
        let scroll = self.focused_scroll_mut();
        *scroll = scroll.saturating_sub(1);
    }

    /// Scrolls the focused pane down, keeping at least one row visible.
    pub fn scroll_down(&mut self, row_count: usize) {
        let scroll = self.focused_scroll_mut();
        if *scroll + 1 < row_count {
            *scroll += 1;
        }
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Inputs => &mut self.input_scroll,
            Pane::Outputs => &mut self.output_scroll,
        }
    }
}
