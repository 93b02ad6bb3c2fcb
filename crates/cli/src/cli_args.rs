//! Command-line argument parsing.
//!
//! The interview itself takes no arguments; the flags only tune where the
//! result goes and how the commit list is collected.

use clap::Parser;

use crate::output::OutputFormat;

/// Command-line arguments for the `changelog` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use changelog_cli::cli_args::Args;
///
/// let args = Args::parse_from(["changelog", "--format", "show"]);
/// assert!(args.format.is_some());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Directory the changelog file is written to.
    ///
    /// Relative paths are resolved against the current directory. If not
    /// provided, defaults to `.logs/.changelog`.
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,

    /// Deliver the changelog this way instead of asking.
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Fetch from `origin` before reading branches and commits.
    ///
    /// A failed fetch is logged and the local state is used.
    #[arg(long, action)]
    pub fetch: bool,
}
