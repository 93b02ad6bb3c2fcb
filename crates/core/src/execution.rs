use std::fmt::{Display, Formatter};
use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;

use crate::config::VCS_BINARY;
use crate::error::{Error, Result};

/// Which binary a [`Runner`] invocation targets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandKind {
    /// The version control binary; every argument is passed to it.
    Vcs,
    /// An arbitrary program named by the first argument.
    Os,
}

impl Display for CommandKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandKind::Vcs => f.write_str("vcs"),
            CommandKind::Os => f.write_str("os"),
        }
    }
}

/// Runs external commands and captures their trimmed standard output.
pub trait Runner {
    /// # Errors
    ///
    /// Returns [`Error::NoArgument`] when `args` is empty, and
    /// [`Error::CommandFailed`] carrying stderr when the process exits
    /// unsuccessfully.
    fn run(&self, kind: CommandKind, args: &[&str]) -> Result<String>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, kind: CommandKind, args: &[&str]) -> Result<String> {
        (**self).run(kind, args)
    }
}

/// [`Runner`] backed by real subprocesses in the current working directory.
#[derive(Clone, Copy, Default, Debug)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&self, kind: CommandKind, args: &[&str]) -> Result<String> {
        let Some((first, rest)) = args.split_first() else {
            return Err(Error::NoArgument);
        };

        let (program, args) = match kind {
            CommandKind::Vcs => (VCS_BINARY, args),
            CommandKind::Os => (*first, rest),
        };

        debug!("Running {kind} command: {program} {}", args.join(" "));

        let mut command = Command::new(program);
        command.args(args);
        if let Ok(working_directory) = std::env::current_dir() {
            command.current_dir(working_directory);
        }

        let output = command.output().map_err(Error::SubProcess)?;

        if !output.status.success() {
            return Err(Error::command_failed(
                program,
                &String::from_utf8_lossy(&output.stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Spawns `program` and writes `input` to its standard input.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned, its stdin cannot be
/// written, or it exits with non-zero status.
pub fn pipe_to_command(program: &str, args: &[&str], input: &str) -> Result<()> {
    debug!("Piping {} bytes to {program} {}", input.len(), args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(Error::SubProcess)?;

    // stdin is dropped after writing so the child sees end of input
    let write_result = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    };

    // The child is always reaped; its exit status explains a broken pipe
    let output = child.wait_with_output().map_err(Error::SubProcess)?;

    if !output.status.success() {
        return Err(Error::command_failed(
            program,
            &String::from_utf8_lossy(&output.stderr),
        ));
    }

    write_result.map_err(Error::SubProcess)
}
