//! Zeroconf Domain Service
//!
//! Builds the service-type table from the loaded integrations and renders it
//! as the generated `zeroconf.py` module.

use std::collections::BTreeMap;
use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::domain::entities::{Integrations, ValidationError};
use crate::domain::ports::FileSystem;
use crate::error::{HassfestError, HassfestResult};

/// Plugin name used for every finding of this check
pub const PLUGIN: &str = "zeroconf";

/// Text a config flow must contain to accept zeroconf discoveries
pub const ZEROCONF_STEP_MARKER: &str = " async_step_zeroconf(";

pub const MISSING_CONFIG_FLOW: &str =
    "Zeroconf info in a manifest requires a config flow to exist";
pub const MISSING_ZEROCONF_STEP: &str = "Config flow has no async_step_zeroconf";

const HEADER: &str = r#""""Automatically generated by hassfest.

To update, run python3 -m hassfest
""""#;

/// Service type -> domains declaring it
///
/// Keys iterate in ascending order. Domain lists keep collection order and
/// are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceTypeTable(BTreeMap<String, Vec<String>>);

impl ServiceTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `domain` to the list for `service_type`
    pub fn add(&mut self, service_type: &str, domain: &str) {
        self.0
            .entry(service_type.to_string())
            .or_default()
            .push(domain.to_string());
    }

    /// Domains declaring `service_type`
    pub fn get(&self, service_type: &str) -> Option<&[String]> {
        self.0.get(service_type).map(Vec::as_slice)
    }

    pub fn service_types(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of building the table
#[derive(Debug, Clone, Default)]
pub struct ServiceTypeCollection {
    pub table: ServiceTypeTable,
    pub errors: Vec<ValidationError>,
}

/// Rendered artifact plus the findings made while building it
#[derive(Debug, Clone)]
pub struct ZeroconfBuild {
    pub content: String,
    pub errors: Vec<ValidationError>,
}

/// Collect service types from every integration whose config flow can
/// handle zeroconf discoveries.
///
/// Integrations with no manifest or no `zeroconf` entries are skipped
/// silently. A missing config flow, or one without the zeroconf step, is
/// recorded and the integration is left out of the table. Any other failure
/// to read a config flow is fatal.
pub fn collect_service_types(
    integrations: &Integrations,
    fs: &dyn FileSystem,
) -> HassfestResult<ServiceTypeCollection> {
    let mut collection = ServiceTypeCollection::default();

    for (domain, integration) in integrations {
        let Some(manifest) = integration.manifest() else {
            continue;
        };

        let service_types = manifest.zeroconf();
        if service_types.is_empty() {
            continue;
        }

        let config_flow_path = integration.config_flow_path();
        let config_flow = match fs.read(&config_flow_path) {
            Ok(content) => content,
            Err(err) if err.is_not_found() => {
                tracing::debug!(%domain, "zeroconf declared without a config flow");
                collection.errors.push(ValidationError::for_integration(
                    domain.as_str(),
                    PLUGIN,
                    MISSING_CONFIG_FLOW,
                ));
                continue;
            }
            Err(source) => {
                return Err(HassfestError::ConfigFlowUnreadable {
                    path: config_flow_path,
                    source,
                })
            }
        };

        if !config_flow.contains(ZEROCONF_STEP_MARKER) {
            tracing::debug!(%domain, "config flow lacks the zeroconf step");
            collection.errors.push(ValidationError::for_integration(
                domain.as_str(),
                PLUGIN,
                MISSING_ZEROCONF_STEP,
            ));
            continue;
        }

        for service_type in service_types {
            collection.table.add(service_type, domain);
        }
    }

    Ok(collection)
}

/// Pretty JSON with a 4-space indent and every non-ASCII character written
/// as a `\uXXXX` escape (UTF-16 surrogate pairs above U+FFFF)
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiPrettyFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Render the table as the generated module (no trailing newline)
pub fn render_service_types(table: &ServiceTypeTable) -> HassfestResult<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
    table.serialize(&mut serializer)?;

    // every byte written above is ASCII
    let json = String::from_utf8_lossy(&buf);
    Ok(format!("{HEADER}\n\n\nSERVICE_TYPES = {json}"))
}

/// Build the table and render it in one go
pub fn generate_and_validate(
    integrations: &Integrations,
    fs: &dyn FileSystem,
) -> HassfestResult<ZeroconfBuild> {
    let ServiceTypeCollection { table, errors } = collect_service_types(integrations, fs)?;
    let content = render_service_types(&table)?;

    tracing::debug!(
        service_types = table.len(),
        errors = errors.len(),
        "rendered zeroconf table"
    );

    Ok(ZeroconfBuild { content, errors })
}
