use std::io::Write;

use changelog_core::error::{Error, Result};

use super::{
    frame_height, run_selector, write_option, write_question, write_warning, Console,
    CursorNavigator, Key, KeyReader, Selector, Transition,
};

const HINT: &str = "(Use arrow keys or j/k, Enter to select)";

/// Picks exactly one option from a list.
#[derive(Clone, Debug)]
pub struct SingleSelect {
    options: Vec<String>,
    navigator: CursorNavigator,
}

impl SingleSelect {
    /// # Errors
    ///
    /// Returns [`Error::NoOptions`] when `options` is empty.
    pub fn new(options: &[String]) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::NoOptions);
        }

        Ok(Self {
            options: options.to_vec(),
            navigator: CursorNavigator::new(options.len()),
        })
    }

    pub fn cursor(&self) -> usize {
        self.navigator.cursor()
    }

    /// Asks `question` and returns the option under the cursor on Enter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserCancelled`] on Ctrl+C, or the error of the
    /// terminal, key reader or writer.
    pub fn run<K: KeyReader, W: Write>(
        mut self,
        question: &str,
        console: &mut Console<'_, K, W>,
    ) -> Result<String> {
        write_question(&mut *console.out, question, HINT)?;
        run_selector(&mut self, console)
    }
}

impl Selector for SingleSelect {
    type Output = String;

    fn handle_key(&mut self, key: Key) -> Transition<String> {
        match key {
            Key::Up => Transition::redraw_if(self.navigator.move_up()),
            Key::Down => Transition::redraw_if(self.navigator.move_down()),
            Key::Enter => Transition::Confirm(self.options[self.cursor()].clone()),
            Key::CtrlC => Transition::Cancel,
            _ => Transition::Stay,
        }
    }

    fn draw<W: Write>(&self, out: &mut W, warning: Option<&str>) -> Result<u16> {
        if let Some(message) = warning {
            write_warning(out, message)?;
        }
        for (index, option) in self.options.iter().enumerate() {
            write_option(out, option, index == self.cursor(), None)?;
        }
        Ok(frame_height(self.options.len(), warning))
    }
}
