//! Typed views over the effective config.
//!
//! # Contract
//! - Every field has a default, so an empty config is valid.
//! - Environment overrides are applied once, at startup, through
//!   [`ShopConfig::apply_env`] / [`DaemonConfig::apply_env`]. The lookup is
//!   injected so tests never touch the process environment.
//!
//! ```yaml
//! backend:
//!   base_url: "http://127.0.0.1:8000"
//!   timeout_ms: 10000
//! display:
//!   currency_symbol: "¥"
//! daemon:
//!   addr: "127.0.0.1:8000"
//!   fixture_path: "config/fixtures/demo_shop.yaml"
//!   allowed_origins: ["http://localhost:3000"]
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::LoadedConfig;

/// Overrides `backend.base_url`.
pub const ENV_BACKEND_URL: &str = "SNK_BACKEND_URL";
/// Overrides `backend.timeout_ms`.
pub const ENV_TIMEOUT_MS: &str = "SNK_TIMEOUT_MS";
/// Overrides `daemon.addr`.
pub const ENV_DAEMON_ADDR: &str = "SNK_DAEMON_ADDR";
/// Overrides `daemon.fixture_path`.
pub const ENV_DAEMON_FIXTURE: &str = "SNK_DAEMON_FIXTURE";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CURRENCY: &str = "¥";
const DEFAULT_DAEMON_ADDR: &str = "127.0.0.1:8000";

// ---------------------------------------------------------------------------
// Client view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Everything the ordering client reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub backend: BackendConfig,
    pub display: DisplayConfig,
}

impl ShopConfig {
    /// Typed view of the client sections; unrelated sections are ignored.
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        let cfg: ShopConfig = serde_json::from_value(loaded.config_json.clone())
            .context("config does not match the client schema")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `SNK_BACKEND_URL` / `SNK_TIMEOUT_MS` via `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            self.backend.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            self.backend.timeout_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT_MS} must be an integer, got '{raw}'"))?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.backend.base_url.trim();
        if url.is_empty() {
            bail!("backend.base_url must not be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("backend.base_url must be an http(s) URL, got '{url}'");
        }
        if self.backend.timeout_ms == 0 {
            bail!("backend.timeout_ms must be > 0");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Daemon view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub addr: String,
    /// YAML fixture with `snacks` and `rooms`; `None` = built-in demo data.
    pub fixture_path: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_DAEMON_ADDR.to_string(),
            fixture_path: None,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl DaemonConfig {
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        let cfg: DaemonConfig = match loaded.config_json.get("daemon") {
            Some(v) => serde_json::from_value(v.clone())
                .context("config 'daemon' section does not match the daemon schema")?,
            None => Self::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `SNK_DAEMON_ADDR` / `SNK_DAEMON_FIXTURE` via `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_DAEMON_ADDR) {
            self.addr = addr;
        }
        if let Some(path) = lookup(ENV_DAEMON_FIXTURE) {
            self.fixture_path = Some(path);
        }
        self.validate()
    }

    /// Origins must be explicit `http(s)://host[:port]` values usable as a
    /// header; the wildcard is refused.
    pub fn validate(&self) -> Result<()> {
        if self.addr.trim().is_empty() {
            bail!("daemon.addr must not be empty");
        }
        for origin in &self.allowed_origins {
            if origin == "*" {
                bail!("daemon.allowed_origins must list explicit origins, not '*'");
            }
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                bail!("daemon.allowed_origins entry '{origin}' must be an http(s) origin");
            }
            if !origin.bytes().all(|b| (0x21..=0x7e).contains(&b)) {
                bail!("daemon.allowed_origins entry '{origin}' is not a valid header value");
            }
        }
        Ok(())
    }
}
