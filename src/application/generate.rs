//! Generate Use Case
//!
//! Writes a file rendered by `ValidateUseCase`. There is no way to call this
//! without a `GeneratedFile`, so validation always runs first.

use crate::domain::entities::GeneratedFile;
use crate::domain::ports::FileSystem;
use crate::error::{HassfestError, HassfestResult};

/// Generate Use Case
pub struct GenerateUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> GenerateUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Write the rendered content plus one trailing newline, replacing any
    /// existing file
    pub fn execute(&self, file: &GeneratedFile) -> HassfestResult<()> {
        self.file_system
            .write(file.path(), &file.file_content())
            .map_err(|source| HassfestError::GeneratedFileUnwritable {
                path: file.path().to_path_buf(),
                source,
            })?;

        tracing::info!(path = %file.path().display(), "wrote generated file");
        Ok(())
    }
}
