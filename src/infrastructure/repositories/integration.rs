//! File System Integration Repository
//!
//! Loads integrations from `homeassistant/components/<domain>/manifest.json`
//! through the `FileSystem` port.

use std::path::Path;

use crate::domain::entities::{Integration, IntegrationSet, Manifest, ValidationError};
use crate::domain::ports::{FileSystem, IntegrationRepository};
use crate::error::{HassfestError, HassfestResult};

/// Plugin name for load-time findings
pub const PLUGIN: &str = "model";

const MANIFEST_FILE: &str = "manifest.json";
const SKIPPED_DIRS: &[&str] = &["__pycache__"];

/// Integration repository reading one directory per integration
#[derive(Debug, Clone, Default)]
pub struct FsIntegrationRepository<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> FsIntegrationRepository<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Load one integration directory; a broken manifest is a finding, not
    /// a failure
    fn load_integration(&self, dir: &Path, domain: &str) -> (Integration, Option<ValidationError>) {
        let integration = Integration::new(domain, dir);
        let manifest_path = dir.join(MANIFEST_FILE);

        let content = match self.file_system.read(&manifest_path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                let message = format!("Manifest file {} not found", manifest_path.display());
                return (
                    integration,
                    Some(ValidationError::for_integration(domain, PLUGIN, message)),
                );
            }
            Err(e) => {
                let message = format!("Manifest file {} unreadable: {}", manifest_path.display(), e);
                return (
                    integration,
                    Some(ValidationError::for_integration(domain, PLUGIN, message)),
                );
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                let message = format!("Manifest contains invalid JSON: {}", e);
                return (
                    integration,
                    Some(ValidationError::for_integration(domain, PLUGIN, message)),
                );
            }
        };

        match Manifest::from_value(value) {
            Some(manifest) => (integration.with_manifest(manifest), None),
            None => (
                integration,
                Some(ValidationError::for_integration(
                    domain,
                    PLUGIN,
                    "Manifest is not a JSON object",
                )),
            ),
        }
    }
}

impl<FS: FileSystem> IntegrationRepository for FsIntegrationRepository<FS> {
    fn load_all(&self, components_dir: &Path) -> HassfestResult<IntegrationSet> {
        let domains = self.file_system.list_dirs(components_dir).map_err(|source| {
            if source.is_not_found() {
                HassfestError::ComponentsDirNotFound {
                    path: components_dir.to_path_buf(),
                }
            } else {
                HassfestError::ComponentsDirUnreadable {
                    path: components_dir.to_path_buf(),
                    source,
                }
            }
        })?;

        let mut set = IntegrationSet::default();

        // list_dirs is sorted, so findings come out in domain order
        for domain in domains {
            if SKIPPED_DIRS.contains(&domain.as_str()) {
                continue;
            }

            let (integration, error) = self.load_integration(&components_dir.join(&domain), &domain);
            if let Some(error) = error {
                tracing::debug!(%domain, message = %error.message, "manifest problem");
                set.errors.push(error);
            }
            set.integrations.insert(domain, integration);
        }

        tracing::info!(integrations = set.len(), "loaded integrations");
        Ok(set)
    }
}
