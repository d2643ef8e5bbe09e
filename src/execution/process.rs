use std::{
    io,
    os::{fd::OwnedFd, unix::process::CommandExt},
    process::{Child, Command},
};

use log::debug;

use crate::{
    execution::data::SimpleCommand,
    redirect::OutputRedirect,
    result::{Result, ShellError},
};

/// Builds the process for one simple command with optional pipe ends.
pub struct ChildBuilder<'a> {
    command: &'a SimpleCommand,
    stdout: Option<OwnedFd>,
    stdin: Option<OwnedFd>,
}

impl<'a> ChildBuilder<'a> {
    pub fn new(command: &'a SimpleCommand) -> Self {
        Self {
            command,
            stdout: None,
            stdin: None,
        }
    }

    pub fn stdout<T: Into<OwnedFd>>(&mut self, fd: T) {
        self.stdout = Some(fd.into());
    }

    pub fn stdin<T: Into<OwnedFd>>(&mut self, fd: T) {
        self.stdin = Some(fd.into());
    }

    /// Spawns the process without waiting for it.
    ///
    /// The pipe ends handed to the builder are consumed: the child gets its own
    /// copies and the parent's are closed before this returns, on success and
    /// on failure alike.
    pub fn spawn(self) -> Result<RunningCommand> {
        let command = self.command;
        let program = &command.program_name;
        let redirect = match &command.output_file {
            Some(path) => Some(OutputRedirect::open(path).inspect_err(|e| eprintln!("{e}"))?),
            None => None,
        };

        let mut cmd = Command::new(program);
        cmd.args(&command.args);
        if let Some(stdin) = self.stdin {
            cmd.stdin(stdin);
        }
        if let Some(stdout) = self.stdout {
            cmd.stdout(stdout);
        }
        if let Some(redirect) = redirect {
            unsafe {
                cmd.pre_exec(move || redirect.install());
            }
        }

        let child = cmd.spawn().map_err(|source| {
            report_spawn_failure(program, &source);
            ShellError::SpawnFailure {
                program: program.clone(),
                source,
            }
        })?;
        debug!("spawned {} (pid {})", program, child.id());

        Ok(RunningCommand {
            program: program.clone(),
            child,
        })
    } // cmd dropped here, closing the parent's pipe ends and redirect file
}

fn report_spawn_failure(program: &str, err: &io::Error) {
    if err.kind() == io::ErrorKind::NotFound {
        eprintln!("{}: command not found", program);
    } else {
        eprintln!("{}: {}", program, err);
    }
}

/// A spawned process that has not been waited on yet.
#[derive(Debug)]
pub struct RunningCommand {
    program: String,
    child: Child,
}

impl RunningCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Blocks until the process exits. Only exit code 0 is a success.
    pub fn wait(mut self) -> Result<()> {
        let status = self.child.wait().map_err(|source| ShellError::Wait {
            program: self.program.clone(),
            source,
        })?;
        debug!("{} finished: {}", self.program, status);

        if status.success() {
            Ok(())
        } else {
            Err(ShellError::AbnormalExit {
                program: self.program,
                status,
            })
        }
    }
}
