//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. Flags take precedence
//! over `HASSFEST_*` variables and `hassfest.toml`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Action, ColorMode, Config, Verbosity};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// hassfest - validate and generate the zeroconf service-type table
#[derive(Parser, Debug)]
#[command(name = "hassfest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository root (contains homeassistant/)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Validate only, or regenerate generated files
    #[arg(long, value_enum)]
    pub action: Option<Action>,

    /// Config file (defaults to <root>/hassfest.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layer CLI flags over an already loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        config.root = self.root.clone();
        if let Some(action) = self.action {
            config.action = action;
        }
        if let Some(color) = self.color {
            config.output.color = color.into();
        }
        if self.verbose > 0 {
            config.output.verbosity = Verbosity::from_count(self.verbose);
        }
        config
    }
}
