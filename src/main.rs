//! hassfest CLI - zeroconf generator and validator
//!
//! Usage: hassfest [--root DIR] [--action validate|generate]
//!
//! Exit codes: 0 on success, 1 when findings block the action, 2 on fatal
//! errors (I/O, configuration).

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use hassfest::config::{with_env_overrides, Config, ConfigWarning};
use hassfest::presentation::Cli;

mod commands;
mod logging;
mod ui;

use ui::context::UiContext;

fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match &cli.config {
        Some(path) => {
            let (mut config, warnings) = Config::load_with_warnings(path)?;
            config.root = cli.root.clone();
            let config = with_env_overrides(config, |key| std::env::var(key).ok())?;
            (config, warnings)
        }
        None => Config::discover(&cli.root)?,
    };
    Ok((cli.apply(config), warnings))
}

fn run(cli: &Cli) -> Result<bool> {
    let (config, warnings) = load_config(cli)?;
    let ansi = logging::use_ansi(
        config.output.color,
        |key| std::env::var(key).ok(),
        std::io::stderr().is_terminal(),
    );
    logging::init_cli_logger(config.output.verbosity, ansi);

    let ui = UiContext::new(cli.json, &config);
    commands::run::cmd_run(config, &warnings, &ui)
}

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            if cli.json {
                let _ = ui::json::emit_event(&ui::json::FatalEvent::new(err.to_string()));
            } else {
                eprintln!("Error: {err}");
            }
            2
        }
    };

    std::process::exit(code);
}
