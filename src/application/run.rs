//! Run Use Case
//!
//! The validate/generate driver:
//! 1. Load integrations
//! 2. Validate (render + compare)
//! 3. Decide which findings block: all of them when validating, only the
//!    non-fixable ones when generating
//! 4. Generate if requested and nothing blocks

use std::path::PathBuf;

use crate::config::{Action, Config};
use crate::domain::entities::ValidationError;
use crate::domain::ports::{FileSystem, IntegrationRepository};
use crate::domain::services::DiffResult;
use crate::error::HassfestResult;

use super::{GenerateUseCase, ValidateUseCase};

/// Result of a full run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub action: Action,
    /// Number of integrations loaded
    pub integrations: usize,
    /// Every finding, loader findings first
    pub errors: Vec<ValidationError>,
    /// Findings that make the run fail for this action
    pub blocking: usize,
    /// Written file, if generation ran
    pub generated: Option<PathBuf>,
    /// Diff of the stale generated file, if it was stale
    pub drift: Option<DiffResult>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.blocking == 0
    }

    /// Findings attached to an integration, in domain order
    pub fn integration_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.domain.is_some())
    }

    /// Findings not tied to one integration
    pub fn general_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.domain.is_none())
    }

    /// Domains with at least one finding
    pub fn invalid_integrations(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self
            .integration_errors()
            .filter_map(|e| e.domain.as_deref())
            .collect();
        domains.sort_unstable();
        domains.dedup();
        domains
    }
}

/// Whether a finding fails a run with `action`
pub fn is_blocking(action: Action, error: &ValidationError) -> bool {
    match action {
        Action::Validate => true,
        Action::Generate => !error.fixable,
    }
}

/// Run Use Case
pub struct RunUseCase<IR, FS>
where
    IR: IntegrationRepository,
    FS: FileSystem,
{
    repository: IR,
    file_system: FS,
    config: Config,
}

impl<IR, FS> RunUseCase<IR, FS>
where
    IR: IntegrationRepository,
    FS: FileSystem,
{
    pub fn new(repository: IR, file_system: FS, config: Config) -> Self {
        Self {
            repository,
            file_system,
            config,
        }
    }

    pub fn execute(&self) -> HassfestResult<RunReport> {
        let action = self.config.action;
        let set = self.repository.load_all(&self.config.components_dir())?;

        let outcome = ValidateUseCase::new(&self.file_system, self.config.zeroconf_path())
            .execute(&set.integrations)?;

        let mut errors = set.errors;
        errors.extend(outcome.errors);
        // integration findings grouped by domain, general findings last
        errors.sort_by(|a, b| match (&a.domain, &b.domain) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let blocking = errors.iter().filter(|e| is_blocking(action, e)).count();

        let generated = if action == Action::Generate && blocking == 0 {
            GenerateUseCase::new(&self.file_system).execute(&outcome.file)?;
            Some(outcome.file.path().to_path_buf())
        } else {
            None
        };

        Ok(RunReport {
            action,
            integrations: set.integrations.len(),
            errors,
            blocking,
            generated,
            drift: outcome.drift,
        })
    }
}
