use std::{
    borrow::Cow,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::Path,
};

use anyhow::Context;
use log::{info, warn};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{env::ShellConfig, parse, result::STATUS_SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Exit,
    Normal,
}

/// Append-only log of every line entered in an interactive session.
///
/// Opened when the session starts and closed when it is dropped.
#[derive(Debug)]
pub struct HistoryLog {
    file: File,
}

impl HistoryLog {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open history file {}", path.display()))?;
        Ok(Self { file })
    }

    pub fn record(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        Ok(())
    }
}

/// Handles one interactive line: log it, then either stop or run it.
pub fn handle_interactive_line(line: &str, history: &mut HistoryLog) -> CommandResult {
    if let Err(e) = history.record(line) {
        warn!("could not write history: {:#}", e);
    }

    let tokens = match parse::tokenize(line) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("minish: {}", e);
            return CommandResult::Normal;
        }
    };
    if tokens.first().is_some_and(|t| t == "exit") {
        return CommandResult::Exit;
    }

    crate::run_tokens(&tokens);
    CommandResult::Normal
}

pub fn interactive(config: &ShellConfig) -> anyhow::Result<()> {
    let mut history = HistoryLog::open(&config.history_file)?;
    let mut rl = DefaultEditor::new()?;
    info!("interactive session, history in {}", config.history_file.display());

    loop {
        let ret = match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                let ret = handle_interactive_line(&line, &mut history);
                std::io::stdout().flush()?;
                ret
            }
            // Ctrl-C drops the current line, like bash and zsh.
            Err(ReadlineError::Interrupted) => CommandResult::Normal,
            Err(ReadlineError::Eof) => CommandResult::Exit,
            Err(e) => return Err(e.into()),
        };

        if ret == CommandResult::Exit {
            println!("Exiting shell.");
            break;
        }
    }

    info!("interactive session finished");
    Ok(())
}

/// Runs every line of `reader`, continuing past failures.
///
/// Lines that are not valid UTF-8 are decoded lossily rather than ending the
/// run; only a read error stops it. Returns how many lines did not succeed.
pub fn run_lines<R: BufRead>(reader: R) -> anyhow::Result<usize> {
    let mut failures = 0;
    for line in reader.split(b'\n') {
        let bytes = line.context("failed to read command line")?;
        let line = String::from_utf8_lossy(&bytes);
        if matches!(line, Cow::Owned(_)) {
            warn!("line is not valid UTF-8, running it as {:?}", line);
        }
        if crate::run_line(&line) != STATUS_SUCCESS {
            failures += 1;
        }
    }
    Ok(failures)
}

pub fn batch(script: &Path) -> anyhow::Result<usize> {
    let file = File::open(script)
        .with_context(|| format!("failed to open script {}", script.display()))?;
    info!("running script {}", script.display());
    let failures = run_lines(BufReader::new(file))?;
    if failures > 0 {
        info!("{} line(s) of {} failed", failures, script.display());
    }
    Ok(failures)
}
