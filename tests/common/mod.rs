//! Shared helpers for integration tests.
//!
//! `TestEnv` is a temporary Home Assistant checkout with just the parts
//! hassfest reads: `homeassistant/components/<domain>/` and the generated
//! zeroconf module.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub const ZEROCONF_FLOW: &str = r#"class AcmeFlow(ConfigFlow, domain="acme"):
    async def async_step_zeroconf(self, discovery_info):
        return await self.async_step_user()
"#;

pub const USER_ONLY_FLOW: &str = r#"class AcmeFlow(ConfigFlow, domain="acme"):
    async def async_step_user(self, user_input=None):
        return self.async_abort(reason="not_supported")
"#;

/// Result of running the hassfest binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("homeassistant/components")).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root().join("homeassistant/components")
    }

    pub fn generated_path(&self) -> PathBuf {
        self.root().join("homeassistant/generated/zeroconf.py")
    }

    /// Create an integration directory with the given manifest.json text
    pub fn with_manifest(self, domain: &str, manifest: &str) -> Self {
        let dir = self.components_dir().join(domain);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("manifest.json"), manifest).unwrap();
        self
    }

    /// Manifest declaring `service_types` under `zeroconf`
    pub fn with_zeroconf(self, domain: &str, service_types: &[&str]) -> Self {
        let manifest = serde_json::json!({
            "domain": domain,
            "name": domain,
            "zeroconf": service_types,
        });
        self.with_manifest(domain, &manifest.to_string())
    }

    pub fn with_config_flow(self, domain: &str, content: &str) -> Self {
        let dir = self.components_dir().join(domain);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config_flow.py"), content).unwrap();
        self
    }

    pub fn with_generated(self, content: &str) -> Self {
        let path = self.generated_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn with_config(self, toml: &str) -> Self {
        fs::write(self.root().join("hassfest.toml"), toml).unwrap();
        self
    }

    pub fn generated(&self) -> String {
        fs::read_to_string(self.generated_path()).unwrap()
    }

    /// Run the binary against this tree with a clean environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_hassfest"))
            .arg("--root")
            .arg(self.root())
            .args(args)
            .env_remove("HASSFEST_ACTION")
            .env_remove("HASSFEST_VERBOSITY")
            .env_remove("HASSFEST_COMPONENTS")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .unwrap();

        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
