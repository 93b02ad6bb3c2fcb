//! Raw-mode selector widgets.
//!
//! Each widget draws its options below the question, then reacts to single
//! key presses until the user confirms or cancels. Redraws happen in place:
//! the cursor moves back over the previous frame and clears it before the
//! next one is written.
//!
//! # Key Features
//!
//! - **Single select**: pick one option with the arrow keys or `j`/`k`
//! - **Multi select**: tick options with Space, `a` toggles all, at least one
//!   must be ticked before Enter is accepted
//! - **Yes/No**: inline choice with the arrow keys or `h`/`l`
//! - **Terminal safety**: raw mode is held by a [`RawModeGuard`] and restored
//!   on every exit path, including Ctrl+C
//!
//! Widgets never talk to stdin or stdout directly. A [`Console`] bundles the
//! terminal, a [`KeyReader`] and a writer so the same code runs against a
//! real terminal or a scripted one.

use std::io::Write;

use changelog_core::error::{Error, Result};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use log::debug;

pub mod boolean;
pub mod colors;
pub mod keys;
pub mod multi;
pub mod navigator;
pub mod single;
pub mod terminal;

pub use boolean::BooleanSelect;
pub use keys::{ByteKeys, CrosstermKeys, Key, KeyReader};
pub use multi::MultiSelect;
pub use navigator::CursorNavigator;
pub use single::SingleSelect;
pub use terminal::{CrosstermTerminal, RawModeGuard, RawTerminal};

/// Line break that also returns the carriage while in raw mode
const NEWLINE: &str = "\r\n";

/// What a widget wants after handling one key.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Transition<T> {
    /// Nothing changed
    Stay,
    /// State changed; draw the next frame
    Redraw,
    /// Input rejected; draw the next frame with this warning
    Warn(&'static str),
    /// The user confirmed this value
    Confirm(T),
    /// The user pressed Ctrl+C
    Cancel,
}

impl<T> Transition<T> {
    fn redraw_if(changed: bool) -> Self {
        if changed {
            Transition::Redraw
        } else {
            Transition::Stay
        }
    }
}

/// The terminal a widget runs against.
pub struct Console<'a, K: KeyReader, W: Write> {
    pub terminal: &'a dyn RawTerminal,
    pub keys: &'a mut K,
    pub out: &'a mut W,
}

/// A widget's state machine and rendering.
pub trait Selector {
    type Output;

    /// Applies one key press to the widget state.
    fn handle_key(&mut self, key: Key) -> Transition<Self::Output>;

    /// Writes one frame and returns how many lines it ended below its first
    /// line, which is how far the next redraw moves back up.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn draw<W: Write>(&self, out: &mut W, warning: Option<&str>) -> Result<u16>;
}

/// Runs `selector` in raw mode until it confirms or cancels.
///
/// # Errors
///
/// Returns [`Error::TerminalUnavailable`] if raw mode cannot be entered,
/// [`Error::UserCancelled`] on Ctrl+C, and any error of the key reader or
/// writer. The terminal is restored in every case.
pub fn run_selector<S, K, W>(selector: &mut S, console: &mut Console<'_, K, W>) -> Result<S::Output>
where
    S: Selector,
    K: KeyReader,
    W: Write,
{
    let _guard = RawModeGuard::acquire(console.terminal)?;

    let mut drawn_lines = selector.draw(&mut *console.out, None)?;
    console.out.flush()?;

    loop {
        let key = console.keys.read_key()?;

        let warning = match selector.handle_key(key) {
            Transition::Stay => continue,
            Transition::Redraw => None,
            Transition::Warn(message) => Some(message),
            Transition::Confirm(value) => {
                queue!(console.out, Print(NEWLINE))?;
                console.out.flush()?;
                return Ok(value);
            }
            Transition::Cancel => {
                debug!("Selection cancelled");
                queue!(console.out, Print(NEWLINE))?;
                console.out.flush()?;
                return Err(Error::UserCancelled);
            }
        };

        erase_frame(&mut *console.out, drawn_lines)?;
        drawn_lines = selector.draw(&mut *console.out, warning)?;
        console.out.flush()?;
    }
}

/// Moves back to the first line of the previous frame and clears everything
/// below it.
fn erase_frame<W: Write>(out: &mut W, drawn_lines: u16) -> Result<()> {
    if drawn_lines > 0 {
        queue!(out, MoveUp(drawn_lines))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    Ok(())
}

/// Writes `? question (hint)` on its own line.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn write_question<W: Write>(out: &mut W, question: &str, hint: &str) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(colors::QUESTION),
        Print("? "),
        ResetColor,
        SetAttribute(Attribute::Bold),
        Print(question),
        SetAttribute(Attribute::Reset),
        Print(" "),
        SetForegroundColor(colors::HINT),
        Print(hint),
        ResetColor,
        Print(NEWLINE)
    )?;
    out.flush()?;
    Ok(())
}

/// Writes one option line, with an optional checkbox.
fn write_option<W: Write>(
    out: &mut W,
    label: &str,
    under_cursor: bool,
    checkbox: Option<bool>,
) -> Result<()> {
    if under_cursor {
        queue!(out, SetForegroundColor(colors::CURSOR), Print("❯ "), ResetColor)?;
    } else {
        queue!(out, Print("  "))?;
    }

    match checkbox {
        Some(true) => queue!(out, SetForegroundColor(colors::SELECTED), Print("◉ "), ResetColor)?,
        Some(false) => queue!(out, Print("◯ "))?,
        None => {}
    }

    if under_cursor {
        queue!(out, SetForegroundColor(colors::CURSOR), Print(label), ResetColor)?;
    } else {
        queue!(out, Print(label))?;
    }

    queue!(out, Print(NEWLINE))?;
    Ok(())
}

fn write_warning<W: Write>(out: &mut W, message: &str) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(colors::ERROR),
        Print(format!("⚠ {message}")),
        ResetColor,
        Print(NEWLINE)
    )?;
    Ok(())
}

/// Number of lines in a frame of `options` plus an optional warning.
fn frame_height(options: usize, warning: Option<&str>) -> u16 {
    let lines = options + usize::from(warning.is_some());
    u16::try_from(lines).unwrap_or(u16::MAX)
}
