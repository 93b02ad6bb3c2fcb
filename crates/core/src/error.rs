use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No argument passed in the command.")]
    NoArgument,

    #[error("Error running `{}`: {}", .program, .stderr)]
    CommandFailed { program: String, stderr: String },

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("No username found.")]
    NoUsernameFound,

    #[error("No git branch found, please checkout to a branch.")]
    NoBranchFound,

    #[error("No http url prefix found for current repo.")]
    NoCommitUrlPrefix,

    #[error("Terminal is unavailable: {}", .0)]
    TerminalUnavailable(std::io::Error),

    #[error("Cancelled by user.")]
    UserCancelled,

    #[error("Error while taking input.")]
    InputReadFailed,

    #[error("No options were given to select from.")]
    NoOptions,

    #[error("Unsupported operating system: {}", .0)]
    UnsupportedPlatform(String),

    #[error("IO error with {} at path `{}`: {}", .description, .path, .original)]
    Io {
        description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn command_failed(program: &str, stderr: &str) -> Self {
        Self::CommandFailed {
            program: program.to_string(),
            stderr: stderr.trim().to_string(),
        }
    }

    pub fn io_error(description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            description,
            path,
            original,
        }
    }
}
