//! Processing of messages from background fetch tasks.

use super::{App, AppMessage, ApplyOutcome};
use crate::client::TransactionSource;

impl<S: TransactionSource> App<S> {
    /// Drains pending messages without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    /// Waits for the next message from a fetch task.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        self.message_rx.recv().await
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::TransactionFetched { token, result } => {
                let outcome = self.details.apply(token, result, &mut self.ui);
                if outcome == ApplyOutcome::Loaded {
                    self.nav.reset_scroll();
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
