//! Copying text to the operating system clipboard.

use crate::error::{Error, Result};
use crate::execution::pipe_to_command;

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];

/// Clipboard program and arguments for the target platform.
fn clipboard_command() -> Result<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Ok(("pbcopy", NO_ARGS))
    } else if cfg!(target_os = "linux") {
        Ok(("xclip", XCLIP_ARGS))
    } else if cfg!(target_os = "windows") {
        Ok(("clip", NO_ARGS))
    } else {
        Err(Error::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }
}

/// Copies `text` to the clipboard with the platform clipboard tool.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] on platforms without a known tool,
/// or the failure of the tool itself.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let (program, args) = clipboard_command()?;
    pipe_to_command(program, args, text)
}
