//! Changelog Core Library
//!
//! This crate provides the core functionality for the interactive changelog
//! generator: querying the repository for branch, author and commit history,
//! modelling the changelog entry, and rendering it as Markdown.
//!
//! # Key Features
//!
//! - **Process Runner**: Run version control and OS commands, capturing trimmed output
//! - **Repository Queries**: Username, current branch, commit URLs and commit logs with fallbacks
//! - **Rendering**: File Markdown and a code review dialect from the same entry
//! - **Output**: Timestamped files under `.logs/.changelog` and clipboard copies
//!
//! # Examples
//!
//! Rendering an entry for the current repository:
//!
//! ```no_run
//! use changelog_core::changelog::{Entry, SelectedTypes};
//! use changelog_core::execution::ProcessRunner;
//! use changelog_core::render::generate_markdown;
//! use changelog_core::vcs::Vcs;
//!
//! let vcs = Vcs::new(ProcessRunner);
//! let mut entry = Entry::new(&vcs);
//! entry.title = "Add retry to uploads".to_string();
//! entry.populate_commit_history(&vcs, "main");
//!
//! println!("{}", generate_markdown(&entry, &SelectedTypes::new()));
//! ```

pub mod changelog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod render;
pub mod vcs;
