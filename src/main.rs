use clap::Parser;

use minish::{cli::Cli, env::ShellConfig, session};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ShellConfig::from_cli(&cli);

    match &cli.script {
        Some(script) => {
            session::batch(script)?;
        }
        None => session::interactive(&config)?,
    }
    Ok(())
}
