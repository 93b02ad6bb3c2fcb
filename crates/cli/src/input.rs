//! Text prompts and the [`Prompter`] seam the interview talks through.
//!
//! Free-text answers are read line by line in cooked mode; choices go
//! through the raw-mode widgets in [`crate::selection`].

use std::io::{BufRead, Write};

use changelog_core::changelog::SelectedTypes;
use changelog_core::config::INPUT_SENTINEL;
use changelog_core::error::{Error, Result};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use log::debug;

use crate::selection::{
    colors, BooleanSelect, Console, KeyReader, MultiSelect, RawTerminal, SingleSelect,
};

/// Question asked after "Other" is ticked in a multi-select.
pub const SPECIFY_OTHER: &str = "Please specify";

const EMPTY_INPUT: &str = "Input cannot be empty. Please try again.";

/// Style of a status line written through [`Prompter::notify`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notice {
    Header,
    Info,
    Progress,
    Success,
    Warning,
    Error,
    Plain,
}

impl Notice {
    fn style(self) -> (Option<Color>, &'static str) {
        match self {
            Notice::Header => (Some(colors::HEADER), ""),
            Notice::Info => (Some(colors::CURSOR), ""),
            Notice::Progress => (Some(colors::WARNING), "⏳ "),
            Notice::Success => (Some(colors::SELECTED), "✅ "),
            Notice::Warning => (Some(colors::WARNING), "⚠ "),
            Notice::Error => (Some(colors::ERROR), ""),
            Notice::Plain => (None, ""),
        }
    }
}

/// Everything the interview asks the user.
pub trait Prompter {
    /// A non-blank line of text, asked again while the answer is blank.
    fn single_line(&mut self, question: &str) -> Result<String>;

    /// Free text up to the sentinel line or end of input, joined with `\n`.
    fn multi_line(&mut self, question: &str) -> Result<String>;

    /// Lines up to the sentinel line or end of input, one item per line.
    fn multi_instruction(&mut self, question: &str) -> Result<Vec<String>>;

    fn boolean(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Every option mapped to its value; unticked options map to `""` and a
    /// ticked "Other" maps to the user's own description.
    fn multi_select(&mut self, question: &str, options: &[String]) -> Result<SelectedTypes>;

    fn single_select(&mut self, question: &str, options: &[String]) -> Result<String>;

    /// Writes a styled status line.
    fn notify(&mut self, notice: Notice, message: &str) -> Result<()>;
}

/// Reads one raw line without its line ending, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD.
fn read_lossy_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buffer = Vec::new();
    let read = input
        .read_until(b'\n', &mut buffer)
        .map_err(|_| Error::InputReadFailed)?;
    if read == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buffer);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Reads one line with surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns [`Error::InputReadFailed`] at end of input or on a read error.
pub fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<String> {
    match read_lossy_line(input)? {
        Some(line) => Ok(line.trim().to_string()),
        None => Err(Error::InputReadFailed),
    }
}

/// Collects lines until one equals `sentinel` or input ends.
///
/// Line endings are stripped but other whitespace is kept. A last line
/// without a line ending is kept too.
///
/// # Errors
///
/// Returns [`Error::InputReadFailed`] on a read error.
pub fn read_until_sentinel<R: BufRead>(input: &mut R, sentinel: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    while let Some(line) = read_lossy_line(input)? {
        if line == sentinel {
            break;
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Whether a multi-select option asks for a custom description.
pub fn is_other_option(option: &str) -> bool {
    option.eq_ignore_ascii_case("other")
}

/// [`Prompter`] over a terminal: widgets for choices, line input for text.
pub struct TerminalPrompter<T, K, R, W> {
    terminal: T,
    keys: K,
    input: R,
    out: W,
}

impl<T, K, R, W> TerminalPrompter<T, K, R, W>
where
    T: RawTerminal,
    K: KeyReader,
    R: BufRead,
    W: Write,
{
    pub fn new(terminal: T, keys: K, input: R, out: W) -> Self {
        Self {
            terminal,
            keys,
            input,
            out,
        }
    }

    /// Gives back the writer, so tests can inspect what was printed.
    pub fn into_output(self) -> W {
        self.out
    }

    fn console(&mut self) -> Console<'_, K, W> {
        Console {
            terminal: &self.terminal,
            keys: &mut self.keys,
            out: &mut self.out,
        }
    }

    /// Writes `? question: ` and leaves the cursor on the same line.
    fn ask(&mut self, question: &str) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(colors::QUESTION),
            Print("? "),
            ResetColor,
            SetAttribute(Attribute::Bold),
            Print(format!("{question}:")),
            SetAttribute(Attribute::Reset),
            Print(" ")
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn sentinel_hint(&mut self) -> Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Dim),
            Print(format!(
                "(Enter {INPUT_SENTINEL:?} on a new line or Ctrl+D to finish input)"
            )),
            SetAttribute(Attribute::Reset),
            Print("\n")
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn read_block(&mut self, question: &str) -> Result<Vec<String>> {
        self.ask(question)?;
        self.sentinel_hint()?;
        read_until_sentinel(&mut self.input, INPUT_SENTINEL)
    }
}

impl<T, K, R, W> Prompter for TerminalPrompter<T, K, R, W>
where
    T: RawTerminal,
    K: KeyReader,
    R: BufRead,
    W: Write,
{
    fn single_line(&mut self, question: &str) -> Result<String> {
        loop {
            self.ask(question)?;
            let answer = read_trimmed_line(&mut self.input)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.notify(Notice::Error, EMPTY_INPUT)?;
        }
    }

    fn multi_line(&mut self, question: &str) -> Result<String> {
        let lines = self.read_block(question)?;
        writeln!(self.out)?;
        Ok(lines.join("\n"))
    }

    fn multi_instruction(&mut self, question: &str) -> Result<Vec<String>> {
        self.read_block(question)
    }

    fn boolean(&mut self, question: &str, default: bool) -> Result<bool> {
        BooleanSelect::new(default).run(question, &mut self.console())
    }

    fn multi_select(&mut self, question: &str, options: &[String]) -> Result<SelectedTypes> {
        let mut selected = MultiSelect::new(options)?.run(question, &mut self.console())?;

        for (option, value) in selected.iter_mut() {
            if !value.is_empty() && is_other_option(option) {
                debug!("Asking for a description of `{option}`");
                *value = self.single_line(SPECIFY_OTHER)?;
            }
        }

        Ok(selected)
    }

    fn single_select(&mut self, question: &str, options: &[String]) -> Result<String> {
        SingleSelect::new(options)?.run(question, &mut self.console())
    }

    fn notify(&mut self, notice: Notice, message: &str) -> Result<()> {
        let (color, prefix) = notice.style();
        match color {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color),
                Print(format!("{prefix}{message}")),
                ResetColor,
                Print("\n")
            )?,
            None => queue!(self.out, Print(format!("{message}\n")))?,
        }
        self.out.flush()?;
        Ok(())
    }
}
