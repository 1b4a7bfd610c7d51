//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `repositories/` - Integration loader

pub mod fs;
pub mod repositories;

pub use fs::{LocalFs, MemoryFs};
pub use repositories::FsIntegrationRepository;
