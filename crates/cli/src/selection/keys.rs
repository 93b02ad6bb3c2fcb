//! Key input for the selector widgets.
//!
//! Raw bytes and crossterm key events are both normalised into [`Key`]. The
//! vi letters `h`/`j`/`k`/`l` decode to the same keys as the arrows.

use std::io::Read;

use changelog_core::error::{Error, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

const ESC: u8 = 27;
const CTRL_C: u8 = 3;

/// A key press the widgets react to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    CtrlC,
    Char(char),
}

/// Decodes one input event of 1-3 raw bytes.
///
/// Only single bytes and `ESC [ A..D` arrow sequences are recognised;
/// anything else yields `None`.
pub fn decode_key(bytes: &[u8]) -> Option<Key> {
    match bytes {
        [b'\r'] | [b'\n'] => Some(Key::Enter),
        [CTRL_C] => Some(Key::CtrlC),
        [b' '] => Some(Key::Space),
        [b'k'] | [ESC, b'[', b'A'] => Some(Key::Up),
        [b'j'] | [ESC, b'[', b'B'] => Some(Key::Down),
        [b'l'] | [ESC, b'[', b'C'] => Some(Key::Right),
        [b'h'] | [ESC, b'[', b'D'] => Some(Key::Left),
        [c] if c.is_ascii_graphic() => Some(Key::Char(char::from(*c))),
        _ => None,
    }
}

/// Blocking source of key presses.
pub trait KeyReader {
    /// Blocks until a recognised key is pressed; unrecognised input is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails or is exhausted.
    fn read_key(&mut self) -> Result<Key>;
}

impl<K: KeyReader + ?Sized> KeyReader for &mut K {
    fn read_key(&mut self) -> Result<Key> {
        (**self).read_key()
    }
}

/// Decodes keys from a raw byte stream, one byte at a time.
///
/// An escape is only treated as the start of an arrow sequence when `[`
/// follows it. Otherwise the escape is dropped and the byte after it is
/// decoded on its own, so `ESC` then Enter still confirms.
pub struct ByteKeys<R: Read> {
    reader: R,
    pending: Option<u8>,
}

impl<R: Read> ByteKeys<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    fn next_byte(&mut self) -> Result<u8> {
        if let Some(byte) = self.pending.take() {
            return Ok(byte);
        }

        let mut buffer = [0u8; 1];
        self.reader
            .read_exact(&mut buffer)
            .map_err(|_| Error::InputReadFailed)?;
        Ok(buffer[0])
    }

    fn decode_escape(&mut self) -> Result<Option<Key>> {
        let second = self.next_byte()?;
        if second != b'[' {
            self.pending = Some(second);
            return Ok(None);
        }

        let third = self.next_byte()?;
        if third == ESC {
            self.pending = Some(third);
            return Ok(None);
        }
        Ok(decode_key(&[ESC, second, third]))
    }
}

impl<R: Read> KeyReader for ByteKeys<R> {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            let first = self.next_byte()?;

            let key = if first == ESC {
                self.decode_escape()?
            } else {
                decode_key(&[first])
            };

            if let Some(key) = key {
                return Ok(key);
            }
        }
    }
}

/// Reads key presses from the terminal through crossterm events.
#[derive(Clone, Copy, Default, Debug)]
pub struct CrosstermKeys;

fn from_key_code(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::CtrlC),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(c) if c.is_ascii() => {
            let mut buffer = [0u8; 1];
            c.encode_utf8(&mut buffer);
            decode_key(&buffer)
        }
        _ => None,
    }
}

impl KeyReader for CrosstermKeys {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            let Event::Key(key_event) = event::read().map_err(|_| Error::InputReadFailed)? else {
                continue;
            };

            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(key) = from_key_code(key_event.code, key_event.modifiers) {
                return Ok(key);
            }
        }
    }
}
