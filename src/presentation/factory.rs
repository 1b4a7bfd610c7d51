//! Use Case Factory
//!
//! Wires use cases to the local infrastructure.

use crate::application::RunUseCase;
use crate::config::Config;
use crate::infrastructure::{FsIntegrationRepository, LocalFs};

/// Concrete run use case used by the CLI
pub type LocalRunUseCase = RunUseCase<FsIntegrationRepository<LocalFs>, LocalFs>;

/// Create a run use case reading and writing the local file system
pub fn create_run_use_case(config: Config) -> LocalRunUseCase {
    RunUseCase::new(
        FsIntegrationRepository::new(LocalFs::new()),
        LocalFs::new(),
        config,
    )
}
