//! Application lifecycle: the main event loop.

use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};

use super::App;
use crate::client::TransactionSource;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

impl<S: TransactionSource> App<S> {
    /// Runs the main loop until the user quits.
    ///
    /// With an `initial_txid` the view starts loading it right away;
    /// otherwise the "open transaction" prompt is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui, initial_txid: Option<&str>) -> Result<()> {
        match initial_txid {
            Some(txid) => self.navigate(txid),
            None => self.ui.open_transaction_prompt(),
        }

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();
            terminal.draw(|frame| ui::render(self, frame))?;

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                last_tick = Instant::now();
            }
        }

        self.details.reset();
        Ok(())
    }
}
