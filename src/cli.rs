use std::path::PathBuf;

use clap::Parser;

use crate::env::{DEFAULT_HISTORY_FILE, DEFAULT_PROMPT};

#[derive(Parser, Debug)]
#[command(name = "minish", version, about = "A small command-line interpreter")]
pub struct Cli {
    /// Run the commands in this file instead of reading from the terminal
    pub script: Option<PathBuf>,

    /// File every interactive line is appended to
    #[arg(long, env = "MINISH_HISTFILE", default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,

    /// Interactive prompt
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,
}
