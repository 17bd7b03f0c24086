//! Configuration file support for req-audit.
//!
//! Provides YAML-based configuration through `req-audit.config.yml` files,
//! including data structures, file loading, and validation. Precedence is
//! CLI flag > config file > built-in default.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "req-audit.config.yml";

/// Built-in defaults (the denylist default lives in `Denylist::default`)
const DEFAULT_STORAGE_DIR: &str = "uploads";
const DEFAULT_REGISTRY_URL: &str = "https://pypi.org/pypi";
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;
const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub denylist: Option<Vec<String>>,
    pub storage_dir: Option<String>,
    pub registry_url: Option<String>,
    pub lookup_timeout_secs: Option<u64>,
    pub max_concurrent_lookups: Option<usize>,
    pub listen: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(timeout) = config.lookup_timeout_secs {
        if timeout == 0 || timeout > 60 {
            bail!(
                "Invalid config: lookup_timeout_secs must be between 1 and 60, got {}.\n\n\
                 💡 Hint: Registry lookups need a short per-call timeout (the default is 5).",
                timeout
            );
        }
    }

    if let Some(concurrency) = config.max_concurrent_lookups {
        if concurrency == 0 || concurrency > 64 {
            bail!(
                "Invalid config: max_concurrent_lookups must be between 1 and 64, got {}.\n\n\
                 💡 Hint: The default worker pool size is 8.",
                concurrency
            );
        }
    }

    if let Some(ref url) = config.registry_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(
                "Invalid config: registry_url must start with http:// or https://, got \"{}\".",
                url
            );
        }
    }

    if let Some(ref listen) = config.listen {
        listen.parse::<SocketAddr>().map_err(|_| {
            anyhow::anyhow!(
                "Invalid config: listen must be a socket address like \"127.0.0.1:8080\", got \"{}\".",
                listen
            )
        })?;
    }

    Ok(())
}

/// Warn about unknown fields so typos don't silently change behavior.
fn warn_unknown_fields(config: &ConfigFile) {
    for field in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' ignored.", field);
    }
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub denylist: Option<Vec<String>>,
    pub storage_dir: PathBuf,
    pub registry_url: String,
    pub lookup_timeout: Duration,
    pub max_concurrent_lookups: usize,
    pub listen: SocketAddr,
}

impl AppConfig {
    /// Merges an optional config file over the built-in defaults.
    pub fn from_file(file: Option<ConfigFile>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            denylist: file.denylist,
            storage_dir: PathBuf::from(
                file.storage_dir
                    .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string()),
            ),
            registry_url: file
                .registry_url
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            lookup_timeout: Duration::from_secs(
                file.lookup_timeout_secs
                    .unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECS),
            ),
            max_concurrent_lookups: file
                .max_concurrent_lookups
                .unwrap_or(DEFAULT_MAX_CONCURRENT_LOOKUPS),
            listen: file
                .listen
                .as_deref()
                .unwrap_or(DEFAULT_LISTEN)
                .parse()
                .expect("listen address validated at load time"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_file(None)
    }
}
