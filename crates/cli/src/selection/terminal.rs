//! Raw mode handling for the selector widgets.

use changelog_core::error::{Error, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, warn};

/// Switches the controlling terminal between cooked and raw mode.
pub trait RawTerminal {
    /// Puts the terminal in raw mode, remembering the previous state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalUnavailable`] when there is no terminal to
    /// switch.
    fn enter_raw(&self) -> Result<()>;

    /// Restores the state saved by [`RawTerminal::enter_raw`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalUnavailable`] if the terminal rejects the
    /// previous state.
    fn restore(&self) -> Result<()>;
}

/// [`RawTerminal`] over the process's controlling terminal.
#[derive(Clone, Copy, Default, Debug)]
pub struct CrosstermTerminal;

impl RawTerminal for CrosstermTerminal {
    fn enter_raw(&self) -> Result<()> {
        enable_raw_mode().map_err(Error::TerminalUnavailable)
    }

    fn restore(&self) -> Result<()> {
        disable_raw_mode().map_err(Error::TerminalUnavailable)
    }
}

/// Keeps the terminal in raw mode for as long as it lives.
///
/// The previous mode is restored on drop, so every exit from a widget,
/// including `?` and cancellation, leaves the terminal usable.
pub struct RawModeGuard<'a> {
    terminal: &'a dyn RawTerminal,
}

impl<'a> RawModeGuard<'a> {
    /// # Errors
    ///
    /// Returns the error of [`RawTerminal::enter_raw`]; nothing needs
    /// restoring in that case.
    pub fn acquire(terminal: &'a dyn RawTerminal) -> Result<Self> {
        terminal.enter_raw()?;
        debug!("Entered raw mode");
        Ok(Self { terminal })
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        match self.terminal.restore() {
            Ok(()) => debug!("Restored terminal mode"),
            Err(e) => warn!("Could not restore terminal mode: {e}"),
        }
    }
}
