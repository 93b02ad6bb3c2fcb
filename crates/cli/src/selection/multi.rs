use std::io::Write;

use changelog_core::error::{Error, Result};
use indexmap::IndexMap;

use super::{
    frame_height, run_selector, write_option, write_question, write_warning, Console,
    CursorNavigator, Key, KeyReader, Selector, Transition,
};

const HINT: &str = "(Use arrow keys or j/k to move, Space to select, a to toggle all, Enter to confirm)";
const TOGGLE_ALL: Key = Key::Char('a');

pub const NOTHING_SELECTED: &str = "At least one type is required";

/// Ticks any number of options, at least one.
#[derive(Clone, Debug)]
pub struct MultiSelect {
    options: Vec<String>,
    selected: Vec<bool>,
    navigator: CursorNavigator,
}

impl MultiSelect {
    /// # Errors
    ///
    /// Returns [`Error::NoOptions`] when `options` is empty.
    pub fn new(options: &[String]) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::NoOptions);
        }

        Ok(Self {
            options: options.to_vec(),
            selected: vec![false; options.len()],
            navigator: CursorNavigator::new(options.len()),
        })
    }

    pub fn cursor(&self) -> usize {
        self.navigator.cursor()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&selected| selected).count()
    }

    /// Every option mapped to itself when ticked, or to `""` when not, in
    /// option order.
    pub fn result(&self) -> IndexMap<String, String> {
        self.options
            .iter()
            .zip(&self.selected)
            .map(|(option, &selected)| {
                let value = if selected { option.clone() } else { String::new() };
                (option.clone(), value)
            })
            .collect()
    }

    fn toggle_cursor(&mut self) {
        let cursor = self.cursor();
        self.selected[cursor] = !self.selected[cursor];
    }

    /// Ticks everything, unless everything is already ticked, in which case
    /// it clears everything.
    fn toggle_all(&mut self) {
        let select = self.selected_count() != self.options.len();
        self.selected.fill(select);
    }

    /// Asks `question` and returns [`MultiSelect::result`] once Enter is
    /// pressed with at least one option ticked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserCancelled`] on Ctrl+C, or the error of the
    /// terminal, key reader or writer.
    pub fn run<K: KeyReader, W: Write>(
        mut self,
        question: &str,
        console: &mut Console<'_, K, W>,
    ) -> Result<IndexMap<String, String>> {
        write_question(&mut *console.out, question, HINT)?;
        run_selector(&mut self, console)
    }
}

impl Selector for MultiSelect {
    type Output = IndexMap<String, String>;

    fn handle_key(&mut self, key: Key) -> Transition<Self::Output> {
        match key {
            Key::Up => Transition::redraw_if(self.navigator.move_up()),
            Key::Down => Transition::redraw_if(self.navigator.move_down()),
            Key::Space => {
                self.toggle_cursor();
                Transition::Redraw
            }
            TOGGLE_ALL => {
                self.toggle_all();
                Transition::Redraw
            }
            Key::Enter if self.selected_count() == 0 => Transition::Warn(NOTHING_SELECTED),
            Key::Enter => Transition::Confirm(self.result()),
            Key::CtrlC => Transition::Cancel,
            _ => Transition::Stay,
        }
    }

    fn draw<W: Write>(&self, out: &mut W, warning: Option<&str>) -> Result<u16> {
        if let Some(message) = warning {
            write_warning(out, message)?;
        }
        for (index, (option, &selected)) in self.options.iter().zip(&self.selected).enumerate() {
            write_option(out, option, index == self.cursor(), Some(selected))?;
        }
        Ok(frame_height(self.options.len(), warning))
    }
}
