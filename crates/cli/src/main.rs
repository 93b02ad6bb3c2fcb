use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use changelog_cli::cli_args::Args;
use changelog_cli::input::TerminalPrompter;
use changelog_cli::interview::{self, Options};
use changelog_cli::output::SystemClipboard;
use changelog_cli::selection::{colors, CrosstermKeys, CrosstermTerminal};
use changelog_core::config;
use changelog_core::error::{Error, Result};
use changelog_core::execution::ProcessRunner;
use changelog_core::vcs::Vcs;
use clap::Parser;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();

    let working_directory = env::current_dir().map_err(|e| {
        Error::io_error("working directory".to_string(), ".".to_string(), e)
    })?;
    let options = Options {
        output_dir: config::get_output_dir(&args.output_dir, &working_directory),
        format: args.format,
        fetch: args.fetch,
    };
    debug!("Output directory: `{}`", options.output_dir.display());

    let vcs = Vcs::new(ProcessRunner);
    let mut prompter = TerminalPrompter::new(
        CrosstermTerminal,
        CrosstermKeys,
        io::stdin().lock(),
        io::stdout(),
    );

    interview::run(&mut prompter, &vcs, &SystemClipboard, &options)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut stderr = io::stderr();
            if crossterm::execute!(
                stderr,
                SetForegroundColor(colors::ERROR),
                Print(format!("{e}\n")),
                ResetColor
            )
            .is_err()
            {
                eprintln!("{e}");
            }
            let _ = stderr.flush();
            ExitCode::FAILURE
        }
    }
}
