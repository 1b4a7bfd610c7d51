//! Application Layer
//!
//! Use cases that orchestrate the flow between ports and domain services.
//!
//! ## Use Cases
//!
//! - `ValidateUseCase` - Render the zeroconf module and compare with disk
//! - `GenerateUseCase` - Write a rendered module
//! - `RunUseCase` - Load, validate, then generate when asked and allowed

pub mod generate;
pub mod run;
pub mod validate;

pub use generate::GenerateUseCase;
pub use run::{is_blocking, RunReport, RunUseCase};
pub use validate::{ValidateOutcome, ValidateUseCase, STALE_FILE};
