//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HassfestError, HassfestResult};

use super::loader::{self, ConfigWarning};

/// Name of the optional config file at the repository root
pub const CONFIG_FILE: &str = "hassfest.toml";

/// Location of the generated module, relative to the root
pub const ZEROCONF_PATH: &str = "homeassistant/generated/zeroconf.py";

const DEFAULT_COMPONENTS_DIR: &str = "homeassistant/components";

/// What a run does after validating
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Report every finding, write nothing
    #[default]
    Validate,
    /// Regenerate files; fixable findings do not block
    Generate,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Validate => "validate",
            Action::Generate => "generate",
        }
    }
}

impl FromStr for Action {
    type Err = HassfestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "validate" => Ok(Action::Validate),
            "generate" => Ok(Action::Generate),
            _ => Err(HassfestError::UnknownAction {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source tree layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per integration
    #[serde(default = "default_components_dir")]
    pub components: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            components: default_components_dir(),
        }
    }
}

fn default_components_dir() -> PathBuf {
    PathBuf::from(DEFAULT_COMPONENTS_DIR)
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count onto a level (0 keeps `Normal`)
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

impl FromStr for Verbosity {
    type Err = HassfestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "debug" => Ok(Verbosity::Debug),
            _ => Err(HassfestError::UnknownVerbosity {
                value: s.to_string(),
            }),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository root; every relative path is resolved against it
    #[serde(skip, default = "default_root")]
    pub root: PathBuf,

    /// Set from CLI or environment only
    #[serde(skip)]
    pub action: Action,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            action: Action::default(),
            paths: PathsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Defaults rooted at `root`
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HassfestResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> HassfestResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<root>/hassfest.toml` if present, apply env overrides
    pub fn discover(root: &Path) -> HassfestResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(root)
    }

    /// Directory scanned for integrations
    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.paths.components)
    }

    /// Path of the generated zeroconf module
    pub fn zeroconf_path(&self) -> PathBuf {
        self.root.join(ZEROCONF_PATH)
    }
}
