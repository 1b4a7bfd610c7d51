//! GeneratedFile entity - a rendered artifact and where it belongs
//!
//! Produced by validation and handed to generation, so the rendered text is
//! computed once per run.

use std::path::{Path, PathBuf};

/// A rendered file ready to be compared or written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute or root-relative destination
    path: PathBuf,
    /// Rendered content, without trailing newline
    content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content as it is written to disk (exactly one trailing newline)
    pub fn file_content(&self) -> String {
        format!("{}\n", self.content)
    }

    /// Compare against on-disk text, ignoring surrounding whitespace
    pub fn matches(&self, current: &str) -> bool {
        current.trim() == self.content.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_content_appends_single_newline() {
        let file = GeneratedFile::new("zeroconf.py", "SERVICE_TYPES = {}");
        assert_eq!(file.file_content(), "SERVICE_TYPES = {}\n");
    }

    #[test]
    fn matches_ignores_surrounding_whitespace() {
        let file = GeneratedFile::new("zeroconf.py", "SERVICE_TYPES = {}");
        assert!(file.matches("\n  SERVICE_TYPES = {}\n\n"));
        assert!(!file.matches("SERVICE_TYPES = {\n}"));
    }
}
