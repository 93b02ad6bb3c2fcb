/// Cursor over a non-empty list of options.
///
/// Movement clamps at both ends; there is no wraparound.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CursorNavigator {
    cursor: usize,
    max_index: usize,
}

impl CursorNavigator {
    /// Cursor on the first of `len` options. `len` must be at least one.
    pub fn new(len: usize) -> Self {
        Self::with_cursor(len, 0)
    }

    /// Cursor on `cursor`, clamped to the last of `len` options.
    pub fn with_cursor(len: usize, cursor: usize) -> Self {
        let max_index = len.saturating_sub(1);
        Self {
            cursor: cursor.min(max_index),
            max_index,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves one option up. Returns whether the cursor moved.
    pub fn move_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves one option down. Returns whether the cursor moved.
    pub fn move_down(&mut self) -> bool {
        if self.cursor == self.max_index {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Jumps to `index`, clamped to the last option. Returns whether the
    /// cursor moved.
    pub fn move_to(&mut self, index: usize) -> bool {
        let index = index.min(self.max_index);
        let moved = index != self.cursor;
        self.cursor = index;
        moved
    }
}
