use std::io::Write;

use changelog_core::error::Result;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};

use super::{
    colors, run_selector, write_question, Console, CursorNavigator, Key, KeyReader, Selector,
    Transition,
};

const HINT: &str = "(Use ←/→ or h/l, Enter to confirm)";

const LABELS: [&str; 2] = ["Yes", "No"];
const YES: usize = 0;
const NO: usize = 1;

/// Inline Yes/No choice over two slots, Yes first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BooleanSelect {
    navigator: CursorNavigator,
}

impl BooleanSelect {
    pub fn new(default: bool) -> Self {
        let cursor = if default { YES } else { NO };
        Self {
            navigator: CursorNavigator::with_cursor(LABELS.len(), cursor),
        }
    }

    /// Index of the highlighted slot.
    pub fn cursor(&self) -> usize {
        self.navigator.cursor()
    }

    pub fn value(&self) -> bool {
        self.cursor() == YES
    }

    fn jump(&mut self, index: usize) -> Transition<bool> {
        Transition::redraw_if(self.navigator.move_to(index))
    }

    /// Asks `question` and returns the highlighted answer on Enter.
    ///
    /// # Errors
    ///
    /// Returns [`changelog_core::error::Error::UserCancelled`] on Ctrl+C, or
    /// the error of the terminal, key reader or writer.
    pub fn run<K: KeyReader, W: Write>(
        mut self,
        question: &str,
        console: &mut Console<'_, K, W>,
    ) -> Result<bool> {
        write_question(&mut *console.out, question, HINT)?;
        run_selector(&mut self, console)
    }
}

impl Selector for BooleanSelect {
    type Output = bool;

    fn handle_key(&mut self, key: Key) -> Transition<bool> {
        match key {
            Key::Left => self.jump(YES),
            Key::Right => self.jump(NO),
            Key::Enter => Transition::Confirm(self.value()),
            Key::CtrlC => Transition::Cancel,
            _ => Transition::Stay,
        }
    }

    // Drawn on a single line, so the next frame only needs the line cleared.
    fn draw<W: Write>(&self, out: &mut W, _warning: Option<&str>) -> Result<u16> {
        for (index, label) in LABELS.iter().enumerate() {
            if index == self.cursor() {
                queue!(
                    out,
                    SetForegroundColor(colors::CURSOR),
                    Print(format!("❯ {label}  ")),
                    ResetColor
                )?;
            } else {
                queue!(out, Print(format!("  {label}  ")))?;
            }
        }
        Ok(0)
    }
}
