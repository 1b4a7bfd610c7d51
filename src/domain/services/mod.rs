//! Domain Services
//!
//! Pure logic operating on domain entities. File access, where needed, goes
//! through the `FileSystem` port.

mod differ;
pub mod zeroconf;

pub use differ::{DiffLine, DiffResult, DiffTag, Differ};
pub use zeroconf::{
    collect_service_types, generate_and_validate, render_service_types, ServiceTypeCollection,
    ServiceTypeTable, ZeroconfBuild,
};
