//! hassfest - zeroconf service-type generator and validator
//!
//! Scans integration manifests for zeroconf service types, checks that each
//! declaring integration has a config flow able to handle the discovery, and
//! renders `homeassistant/generated/zeroconf.py`. Validation compares that
//! file with a fresh render; generation rewrites it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateUseCase, RunReport, RunUseCase, ValidateOutcome, ValidateUseCase};
pub use config::{Action, Config};
pub use domain::entities::{GeneratedFile, Integration, IntegrationSet, Manifest, ValidationError};
pub use domain::services::{generate_and_validate, ServiceTypeTable};
pub use error::{HassfestError, HassfestResult};
