//! Repository Implementations

mod integration;

pub use integration::FsIntegrationRepository;
