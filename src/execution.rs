pub mod data;
pub mod process;

use std::io::{self, PipeReader, PipeWriter};

use log::debug;

use crate::{
    execution::{
        data::{CommandSequence, CompoundCommand, Operator, SimpleCommand},
        process::{ChildBuilder, RunningCommand},
    },
    result::{Result, ShellError},
};

/// Runs every compound command of a line, left to right, one at a time.
///
/// A `;` line stops at the first failure and reports it. An `&` line keeps
/// going and reports the result of the last command.
pub fn launch_command(sequence: &CommandSequence) -> Result<()> {
    let mut result = Ok(());

    for command in &sequence.commands {
        result = launch_compound_command(command);
        if let Err(e) = &result {
            if !sequence.in_parallel {
                debug!("stopping sequence: {}", e);
                break;
            }
            debug!("continuing after failure: {}", e);
        }
    }

    result
}

pub fn launch_compound_command(command: &CompoundCommand) -> Result<()> {
    match &command.operator {
        Operator::None => launch_simple_command(&command.cmd1, None, None),
        Operator::And(cmd2) => {
            launch_simple_command(&command.cmd1, None, None)?;
            launch_simple_command(cmd2, None, None)
        }
        Operator::Or(cmd2) => match launch_simple_command(&command.cmd1, None, None) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!("{}; running the alternative", e);
                launch_simple_command(cmd2, None, None)
            }
        },
        Operator::Pipe(cmd2) => launch_pipeline(&command.cmd1, cmd2),
    }
}

/// Runs one command to completion with the given pipe ends as stdin/stdout.
pub fn launch_simple_command(
    command: &SimpleCommand,
    read_end: Option<PipeReader>,
    write_end: Option<PipeWriter>,
) -> Result<()> {
    spawn_simple_command(command, read_end, write_end)?.wait()
}

fn spawn_simple_command(
    command: &SimpleCommand,
    read_end: Option<PipeReader>,
    write_end: Option<PipeWriter>,
) -> Result<RunningCommand> {
    let mut builder = ChildBuilder::new(command);
    if let Some(read_end) = read_end {
        builder.stdin(read_end);
    }
    if let Some(write_end) = write_end {
        builder.stdout(write_end);
    }
    builder.spawn()
}

/// `cmd1 | cmd2`. Both ends are spawned before either is waited on, so a
/// writer that fills the pipe buffer is drained by its reader. The status of
/// the pipeline is the status of `cmd2`.
fn launch_pipeline(cmd1: &SimpleCommand, cmd2: &SimpleCommand) -> Result<()> {
    let (reader, writer) = io::pipe().map_err(ShellError::Pipe)?;

    // A failed upstream spawn has already closed the write end, so the
    // downstream command still runs and sees end of input.
    let upstream = spawn_simple_command(cmd1, None, Some(writer));
    let downstream = spawn_simple_command(cmd2, Some(reader), None);

    match upstream {
        Ok(upstream) => {
            let program = upstream.program().to_string();
            if let Err(e) = upstream.wait() {
                debug!("discarding status of {}: {}", program, e);
            }
        }
        Err(e) => debug!("discarding upstream failure: {}", e),
    }

    downstream?.wait()
}
