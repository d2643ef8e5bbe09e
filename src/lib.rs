pub mod cli;
pub mod env;
pub mod execution;
pub mod parse;
pub mod redirect;
pub mod result;
pub mod session;

use log::debug;

use crate::result::{ShellError, status_of};

/// Tokenizes, parses and runs one line, keeping the cause of any failure.
pub fn execute_line(line: &str) -> Result<(), ShellError> {
    let tokens = parse::tokenize(line)?;
    execute_tokens(&tokens)
}

/// Parses and runs an already tokenized line.
pub fn execute_tokens(tokens: &[String]) -> Result<(), ShellError> {
    let (sequence, _) = parse::parse(tokens)?;
    execution::launch_command(&sequence)
}

/// Runs one line and returns `0` on success or `-1` on any failure.
pub fn run_line(line: &str) -> i32 {
    report(execute_line(line))
}

/// Like [`run_line`], for a line the caller has already tokenized.
pub fn run_tokens(tokens: &[String]) -> i32 {
    report(execute_tokens(tokens))
}

/// Prints a failure on stderr unless the process layer already did, then
/// collapses the result to a status.
fn report(result: Result<(), ShellError>) -> i32 {
    match &result {
        Err(e) if e.reported_at_source() => debug!("line failed: {}", e),
        Err(e) => eprintln!("minish: {}", e),
        Ok(()) => {}
    }
    status_of(&result)
}
