//! Writing rendered changelogs to disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::changelog::{Entry, SelectedTypes};
use crate::error::{Error, Result};
use crate::render::generate_markdown;

/// Renders `entry` as file Markdown and writes it to
/// `<output_dir>/<entry.filename>`, creating the directory if needed.
///
/// The document is rendered in full before anything touches the disk.
///
/// # Returns
///
/// The path of the written file
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn save_to_file(
    entry: &Entry,
    selected_types: &SelectedTypes,
    output_dir: &Path,
) -> Result<PathBuf> {
    let content = generate_markdown(entry, selected_types);

    fs::create_dir_all(output_dir).map_err(|e| {
        Error::io_error(
            "changelog directory".to_string(),
            output_dir.display().to_string(),
            e,
        )
    })?;

    let full_path = output_dir.join(&entry.filename);
    fs::write(&full_path, content).map_err(|e| {
        Error::io_error(
            "changelog file".to_string(),
            full_path.display().to_string(),
            e,
        )
    })?;

    info!("Changelog written to `{}`", full_path.display());
    Ok(full_path)
}
