//! Command execution and route handling.

use crossterm::event::KeyEvent;

use super::{App, AppMessage, Pane, PopupState, Route};
use crate::client::TransactionSource;
use crate::commands::{AppCommand, InputContext, map_key};

impl<S: TransactionSource> App<S> {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        if command.is_navigation() {
            tracing::debug!("{command:?} in {context:?}");
        }
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::OpenTransaction { .. } => InputContext::OpenPrompt,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => InputContext::Details,
        }
    }

    pub fn execute_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Reload => {
                if let Some(route) = self.nav.history.reload() {
                    self.open_route(route);
                }
            }
            AppCommand::OpenPrompt => self.ui.open_transaction_prompt(),
            AppCommand::Back => {
                if let Some(route) = self.nav.history.back() {
                    self.open_route(route);
                }
            }
            AppCommand::CycleFocus => self.nav.toggle_focus(),
            AppCommand::ScrollUp => self.nav.scroll_up(),
            AppCommand::ScrollDown => {
                let rows = self.focused_row_count();
                self.nav.scroll_down(rows);
            }
            AppCommand::Dismiss => self.ui.dismiss_popup(),
            AppCommand::TypeChar(c) => self.ui.prompt_input(c),
            AppCommand::Backspace => self.ui.prompt_backspace(),
            AppCommand::Submit => {
                if let Some(txid) = self.ui.take_prompt_query() {
                    self.navigate(&txid);
                }
            }
            AppCommand::Noop => {}
        }
    }

    /// Navigates to `txid`, recording it in the history.
    pub fn navigate(&mut self, txid: &str) {
        let route = self.nav.history.navigate(txid);
        self.open_route(route);
    }

    /// Reacts to a route emission: enters `Loading` and starts the fetch.
    pub fn open_route(&mut self, route: Route) {
        tracing::info!("Opening transaction {}", route.txid);
        let token = self.details.begin(route.txid.clone());

        let source = self.source.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = source.get(&route.txid).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::TransactionFetched { token, result });
        });
    }

    fn focused_row_count(&self) -> usize {
        self.details.transaction().map_or(0, |details| match self.nav.focus {
            Pane::Inputs => details.inputs.len(),
            Pane::Outputs => details.outputs.len(),
        })
    }
}
