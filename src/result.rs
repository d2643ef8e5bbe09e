use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Status reported to the front-ends when a line ran successfully.
pub const STATUS_SUCCESS: i32 = 0;
/// Status reported for every failure cause, whatever stage it came from.
pub const STATUS_FAILURE: i32 = -1;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("token '{token}' is {len} bytes long (limit is {max})")]
    TokenTooLong { token: String, len: usize, max: usize },
    #[error("too many tokens on one line (limit is {0})")]
    TooManyTokens(usize),
    #[error("expected a command, found '{0}'")]
    EmptyOperand(String),
    #[error("no output file specified for redirection")]
    MissingRedirectTarget,
    #[error("{program}: too many arguments (limit is {max})")]
    TooManyArgs { program: String, max: usize },
    #[error("too many commands on one line (limit is {0})")]
    TooManyCommands(usize),
    #[error("';' and '&' cannot be mixed on one line")]
    MixedSeparators,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("failed to create pipe: {0}")]
    Pipe(#[source] io::Error),
    #[error("{program}: {source}")]
    SpawnFailure {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    RedirectFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{program}: failed to wait for process: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program}: {status}")]
    AbnormalExit { program: String, status: ExitStatus },
}

impl ShellError {
    /// Errors raised while tokenizing or parsing, before anything was run.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::TokenTooLong { .. }
                | Self::TooManyTokens(_)
                | Self::EmptyOperand(_)
                | Self::MissingRedirectTarget
                | Self::TooManyArgs { .. }
                | Self::TooManyCommands(_)
                | Self::MixedSeparators
                | Self::UnexpectedToken(_)
        )
    }

    /// Spawn and redirect failures are printed where they happen, so that a
    /// failing `cmd1 || cmd2` still shows why `cmd1` did not run.
    pub fn reported_at_source(&self) -> bool {
        matches!(self, Self::SpawnFailure { .. } | Self::RedirectFailure { .. })
    }

    /// The exit code of a program that terminated normally with a nonzero code.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::AbnormalExit { status, .. } => status.code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;

/// Collapses a line result to the integer status the front-ends consume.
pub fn status_of(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => STATUS_SUCCESS,
        Err(_) => STATUS_FAILURE,
    }
}
