//! Integration entity - one directory under `homeassistant/components`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{Manifest, ValidationError};

/// Name of the config flow module inside an integration directory
pub const CONFIG_FLOW_FILE: &str = "config_flow.py";

/// A loaded integration
///
/// Read-only once produced by an `IntegrationRepository`.
#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    domain: String,
    manifest: Option<Manifest>,
    path: PathBuf,
}

impl Integration {
    /// Create an integration without a manifest
    pub fn new(domain: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            domain: domain.into(),
            manifest: None,
            path: path.into(),
        }
    }

    /// Builder: attach a manifest
    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expected location of the integration's config flow
    pub fn config_flow_path(&self) -> PathBuf {
        self.path.join(CONFIG_FLOW_FILE)
    }
}

/// Integrations keyed by domain; iteration is in ascending domain order
pub type Integrations = BTreeMap<String, Integration>;

/// Everything a loader produced: the integrations plus load-time findings
#[derive(Debug, Clone, Default)]
pub struct IntegrationSet {
    pub integrations: Integrations,
    pub errors: Vec<ValidationError>,
}

impl IntegrationSet {
    /// Build a set from integrations with no load errors
    pub fn from_integrations(integrations: impl IntoIterator<Item = Integration>) -> Self {
        Self {
            integrations: integrations
                .into_iter()
                .map(|i| (i.domain().to_string(), i))
                .collect(),
            errors: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.integrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.integrations.is_empty()
    }
}
