//! Presentation Layer
//!
//! - `cli` - CLI argument parsing (via clap)
//! - `factory` - Creates use cases with local infrastructure

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_run_use_case, LocalRunUseCase};
