//! Validate Use Case
//!
//! Renders the zeroconf module from the current integrations and compares it
//! with the file on disk. The rendered file is returned so a following
//! generate step can write it without rendering again.

use std::path::PathBuf;

use crate::domain::entities::{GeneratedFile, Integrations, ValidationError};
use crate::domain::ports::FileSystem;
use crate::domain::services::{zeroconf, DiffResult, Differ};
use crate::error::{HassfestError, HassfestResult};

/// Finding recorded when the generated file differs from the rendered one
pub const STALE_FILE: &str =
    "File zeroconf.py is not up to date. Run python3 -m script.hassfest";

/// Result of the validate operation
#[derive(Debug, Clone)]
pub struct ValidateOutcome {
    /// Freshly rendered module, populated even when stale
    pub file: GeneratedFile,
    /// Findings from building the table, then the stale-file finding
    pub errors: Vec<ValidationError>,
    /// Line diff (on disk -> rendered) when the file is stale
    pub drift: Option<DiffResult>,
}

impl ValidateOutcome {
    /// True when the on-disk file did not match
    pub fn is_stale(&self) -> bool {
        self.drift.is_some()
    }
}

/// Validate Use Case
pub struct ValidateUseCase<FS: FileSystem> {
    file_system: FS,
    zeroconf_path: PathBuf,
}

impl<FS: FileSystem> ValidateUseCase<FS> {
    pub fn new(file_system: FS, zeroconf_path: impl Into<PathBuf>) -> Self {
        Self {
            file_system,
            zeroconf_path: zeroconf_path.into(),
        }
    }

    /// Render and compare against the generated file
    ///
    /// A generated file that cannot be read is fatal; it is not turned into
    /// a finding.
    pub fn execute(&self, integrations: &Integrations) -> HassfestResult<ValidateOutcome> {
        let build = zeroconf::generate_and_validate(integrations, &self.file_system)?;
        let file = GeneratedFile::new(&self.zeroconf_path, build.content);
        let mut errors = build.errors;

        let current = self.file_system.read(&self.zeroconf_path).map_err(|source| {
            HassfestError::GeneratedFileUnreadable {
                path: self.zeroconf_path.clone(),
                source,
            }
        })?;

        let drift = if file.matches(&current) {
            None
        } else {
            tracing::warn!(path = %self.zeroconf_path.display(), "generated file is stale");
            errors.push(ValidationError::general(zeroconf::PLUGIN, STALE_FILE).fixable());
            Some(Differ::new().drift(&current, file.content()))
        };

        Ok(ValidateOutcome {
            file,
            errors,
            drift,
        })
    }
}
