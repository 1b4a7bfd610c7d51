//! Manifest entity - an integration's declarative metadata
//!
//! Only the `zeroconf` field is interpreted here; every other key is carried
//! along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the list of zeroconf service types
pub const ZEROCONF_KEY: &str = "zeroconf";

/// Parsed `manifest.json` (always a JSON object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Build a manifest from a JSON value; `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Service types declared under `zeroconf`
    ///
    /// Absent, `null` and non-array values yield an empty list. Non-string
    /// members are dropped. Order and duplicates are kept as written.
    pub fn zeroconf(&self) -> Vec<&str> {
        let Some(Value::Array(items)) = self.fields.get(ZEROCONF_KEY) else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| {
                let service_type = item.as_str();
                if service_type.is_none() {
                    tracing::debug!(value = %item, "ignoring non-string zeroconf entry");
                }
                service_type
            })
            .collect()
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the manifest has no keys
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
