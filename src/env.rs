use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_HISTORY_FILE: &str = "history.txt";
pub const DEFAULT_PROMPT: &str = "shell> ";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub history_file: PathBuf,
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            history_file: cli.history.clone(),
            prompt: cli.prompt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_from_empty_command_line() {
        let cli = Cli::try_parse_from(["minish"]).unwrap();
        let config = ShellConfig::from_cli(&cli);
        assert_eq!(cli.script, None);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn script_and_overrides() {
        let cli = Cli::try_parse_from([
            "minish",
            "--history",
            "/tmp/h.txt",
            "--prompt",
            "$ ",
            "run.sh",
        ])
        .unwrap();
        let config = ShellConfig::from_cli(&cli);
        assert_eq!(cli.script, Some(PathBuf::from("run.sh")));
        assert_eq!(config.history_file, PathBuf::from("/tmp/h.txt"));
        assert_eq!(config.prompt, "$ ");
    }
}
