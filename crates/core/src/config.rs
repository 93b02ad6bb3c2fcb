//! Configuration defaults for the changelog generator.
//!
//! This module holds the fixed labels the interview and renderers agree on,
//! and resolves the directory generated changelog files are written to.

use std::path::{Path, PathBuf};

/// Default directory, relative to the working directory, for generated files
pub const DEFAULT_OUTPUT_DIR: &str = ".logs/.changelog";

/// Version control binary used for all repository queries
pub const VCS_BINARY: &str = "git";

/// Line that terminates multi-line input
pub const INPUT_SENTINEL: &str = "EOF";

/// Label of the change type that asks for a custom description
pub const OTHER_CHANGE_TYPE: &str = "Other";

/// Change types offered by the interview, in rendering order.
pub const CHANGE_TYPES: [&str; 6] = [
    "Bug fix",
    "New feature",
    "Code refactor",
    "Breaking change",
    "Documentation update",
    OTHER_CHANGE_TYPE,
];

/// Checklist statements, in the order of the fields on `Checklist`.
pub const CHECKLIST_ITEMS: [&str; 5] = [
    "I have performed a self-review of my code",
    "I have added tests that prove my fix is effective or my feature works",
    "I have added necessary documentation (if appropriate)",
    "I have proactively reached out to an engineer to review this PR",
    "I have updated the README file (if appropriate)",
];

pub const OUTPUT_COPY: &str = "Copy Bitbucket PR text";
pub const OUTPUT_SHOW: &str = "Show Bitbucket PR text";
pub const OUTPUT_FILE: &str = "Generate file";

/// Output formats offered by the interview, in display order.
pub const OUTPUT_FORMATS: [&str; 3] = [OUTPUT_COPY, OUTPUT_SHOW, OUTPUT_FILE];

/// Resolves the directory changelog files are written to.
///
/// A custom directory has `~` expanded; relative paths (including the
/// default) are joined onto `working_directory`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use changelog_core::config::get_output_dir;
///
/// let dir = get_output_dir(&None, Path::new("/repo"));
/// assert_eq!(dir, Path::new("/repo/.logs/.changelog"));
///
/// let dir = get_output_dir(&Some("/tmp/notes".to_string()), Path::new("/repo"));
/// assert_eq!(dir, Path::new("/tmp/notes"));
/// ```
pub fn get_output_dir(output_dir_arg: &Option<String>, working_directory: &Path) -> PathBuf {
    let output_dir = match output_dir_arg {
        Some(output_dir) => output_dir.as_str(),
        None => DEFAULT_OUTPUT_DIR,
    };

    let expanded = PathBuf::from(shellexpand::tilde(output_dir).to_string());

    if expanded.is_absolute() {
        expanded
    } else {
        working_directory.join(expanded)
    }
}
