//! Terminal setup and teardown.
//!
//! The TUI draws on the alternate screen in raw mode. [`restore`] undoes
//! both, and also runs from the panic hook so a crash leaves a usable shell.

use std::io::{self, Stdout, stdout};
use std::sync::Once;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::Show,
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Enters raw mode and the alternate screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched over. Raw mode is
/// left again before returning.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    if let Err(err) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    PANIC_HOOK.call_once(install_panic_hook);

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}

/// Leaves the alternate screen, shows the cursor and disables raw mode.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}
