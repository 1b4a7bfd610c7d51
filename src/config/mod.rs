//! Configuration module for hassfest
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HASSFEST_*)
//! 3. Project config (<root>/hassfest.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning};
pub use types::{
    Action, ColorMode, Config, OutputConfig, PathsConfig, Verbosity, CONFIG_FILE, ZEROCONF_PATH,
};
