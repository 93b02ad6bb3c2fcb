//! Changelog CLI Library
//!
//! This crate provides the interactive front end of the changelog generator:
//! it interviews the developer about a branch, collects the commit history
//! and hands the rendered changelog to a file, the clipboard or the terminal.
//!
//! # Key Features
//!
//! - **Raw-mode selectors**: single select, multi select and Yes/No widgets
//!   driven by arrow keys or vi keys
//! - **Line prompts**: required single-line answers and `EOF`-terminated
//!   multi-line answers
//! - **Forgiving interview**: failed prompts and repository queries fall
//!   back to empty values instead of aborting
//! - **Output choices**: Markdown file, clipboard copy or printed text
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selection`]: Raw-mode widgets and the terminal seams they run on
//! - [`input`]: Line prompts and the [`input::Prompter`] trait
//! - [`interview`]: The question flow that fills in a changelog entry
//! - [`output`]: Delivery of the rendered changelog
//!
//! # Examples
//!
//! ```bash
//! # Ask every question, including where the result goes
//! changelog
//!
//! # Write the file into a custom directory without asking
//! changelog --format file --output-dir ~/changelogs
//!
//! # Refresh remote branches first
//! changelog --fetch
//! ```

pub mod cli_args;
pub mod input;
pub mod interview;
pub mod output;
pub mod selection;
