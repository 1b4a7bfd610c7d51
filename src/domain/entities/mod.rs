//! Domain Entities
//!
//! - `Integration` - A directory under homeassistant/components
//! - `Manifest` - Its parsed manifest.json
//! - `ValidationError` - A recorded, non-fatal finding
//! - `GeneratedFile` - A rendered artifact

mod generated_file;
mod integration;
mod manifest;
mod validation_error;

pub use generated_file::GeneratedFile;
pub use integration::{Integration, IntegrationSet, Integrations, CONFIG_FLOW_FILE};
pub use manifest::{Manifest, ZEROCONF_KEY};
pub use validation_error::ValidationError;
