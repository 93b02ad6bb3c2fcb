//! Delivery of the finished changelog.

use std::path::Path;

use changelog_core::changelog::{Entry, SelectedTypes};
use changelog_core::clipboard::copy_to_clipboard;
use changelog_core::config::{OUTPUT_COPY, OUTPUT_FILE, OUTPUT_SHOW};
use changelog_core::error::Result;
use changelog_core::file_handling::save_to_file;
use changelog_core::render::generate_review_markdown;
use clap::ValueEnum;
use log::{info, warn};

use crate::input::{Notice, Prompter};

/// Where the finished changelog goes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Write a Markdown file to the output directory
    File,
    /// Copy the code review text to the clipboard
    Copy,
    /// Print the code review text
    Show,
}

impl OutputFormat {
    /// Label offered in the output format question.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::File => OUTPUT_FILE,
            OutputFormat::Copy => OUTPUT_COPY,
            OutputFormat::Show => OUTPUT_SHOW,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [OutputFormat::Copy, OutputFormat::Show, OutputFormat::File]
            .into_iter()
            .find(|format| format.label() == label)
    }
}

/// Destination of the copy output.
pub trait Clipboard {
    /// # Errors
    ///
    /// Returns an error if the text could not be handed to the clipboard.
    fn copy(&self, text: &str) -> Result<()>;
}

/// The platform clipboard tool.
#[derive(Clone, Copy, Default, Debug)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Renders `entry` for `format` and delivers it.
///
/// A clipboard failure falls back to printing the text.
///
/// # Errors
///
/// Returns the file error when the changelog file cannot be written, and
/// any error writing to the terminal.
pub fn deliver<P: Prompter, C: Clipboard>(
    prompter: &mut P,
    clipboard: &C,
    format: OutputFormat,
    entry: &Entry,
    selected_types: &SelectedTypes,
    output_dir: &Path,
) -> Result<()> {
    info!("Delivering changelog as {format:?}");

    match format {
        OutputFormat::File => {
            let path = save_to_file(entry, selected_types, output_dir)?;
            prompter.notify(
                Notice::Success,
                &format!("Success! Changelog generated at: {}", path.display()),
            )
        }
        OutputFormat::Copy => {
            let text = generate_review_markdown(entry, selected_types);
            match clipboard.copy(&text) {
                Ok(()) => prompter.notify(
                    Notice::Success,
                    "Success! Bitbucket PR content copied to clipboard!",
                ),
                Err(e) => {
                    warn!("Clipboard copy failed: {e}");
                    prompter.notify(Notice::Error, &format!("Error copying to clipboard: {e}"))?;
                    show(prompter, &text)
                }
            }
        }
        OutputFormat::Show => show(prompter, &generate_review_markdown(entry, selected_types)),
    }
}

fn show<P: Prompter>(prompter: &mut P, text: &str) -> Result<()> {
    prompter.notify(Notice::Header, "Bitbucket PR content:")?;
    prompter.notify(Notice::Plain, text)
}
