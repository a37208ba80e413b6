mod cli;
mod commands;
mod context;
mod output;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::analyze;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let format = cli.format;
    let config_path = cli.config;

    match cli.command {
        Command::Analyze(cmd) => analyze::run(cmd, config_path.as_deref(), format),
        Command::Kinds => output::print_kinds(format),
        Command::Config => {
            let settings = context::load_settings(config_path.as_deref())?;
            let text = toml::to_string_pretty(&settings)
                .context("Failed to serialize configuration to TOML")?;
            println!("{text}");
            Ok(())
        }
    }
}
