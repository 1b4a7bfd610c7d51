//! ValidationError entity - a recorded, non-fatal finding
//!
//! Findings are accumulated and returned alongside results so a single run
//! reports every problem instead of stopping at the first one.

use serde::Serialize;

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Check that produced the finding (e.g. "zeroconf", "model")
    pub plugin: String,
    /// Human-readable message
    pub message: String,
    /// Whether `--action generate` repairs it
    pub fixable: bool,
    /// Integration the finding belongs to; `None` for general findings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl ValidationError {
    /// A general (not integration-specific) finding
    pub fn general(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            message: message.into(),
            fixable: false,
            domain: None,
        }
    }

    /// A finding attached to one integration
    pub fn for_integration(
        domain: impl Into<String>,
        plugin: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            message: message.into(),
            fixable: false,
            domain: Some(domain.into()),
        }
    }

    /// Builder: mark as fixable
    pub fn fixable(mut self) -> Self {
        self.fixable = true;
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.plugin.to_uppercase(), self.message)
    }
}
