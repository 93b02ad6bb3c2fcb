//! Colours shared by the prompts and selector widgets.

use crossterm::style::Color;

/// The `?` marker in front of every question
pub const QUESTION: Color = Color::Blue;

/// The `❯` cursor marker and the option under it
pub const CURSOR: Color = Color::Cyan;

/// Ticked checkboxes and confirmations
pub const SELECTED: Color = Color::Green;

/// Usage hints next to a question
pub const HINT: Color = Color::DarkGrey;

/// Warnings the interview recovers from
pub const WARNING: Color = Color::Yellow;

/// Errors and rejected input
pub const ERROR: Color = Color::Red;

/// Section banners
pub const HEADER: Color = Color::Magenta;
