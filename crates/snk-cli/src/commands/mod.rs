//! Command handler modules for snk-cli.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod catalog;
pub mod order;
pub mod shell;

use anyhow::{Context, Result};
use snk_client::HttpShopBackend;
use snk_config::{
    load_layered_yaml, report_unused_keys, ConfigConsumer, LoadedConfig, ShopConfig,
    UnusedKeyPolicy,
};
use tracing::warn;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Effective client config: layered files, then env, then `--backend-url`.
pub fn resolve_config(paths: &[String], backend_url: Option<&str>) -> Result<ShopConfig> {
    let loaded = load_paths(paths)?;

    let report = report_unused_keys(
        ConfigConsumer::Client,
        &loaded.config_json,
        UnusedKeyPolicy::Warn,
    )?;
    for pointer in &report.unused_leaf_pointers {
        warn!(pointer = %pointer, "unused config key");
    }

    let mut cfg = ShopConfig::from_loaded(&loaded)?;
    cfg.apply_env(|k| std::env::var(k).ok())?;
    if let Some(url) = backend_url {
        cfg.backend.base_url = url.to_string();
        cfg.validate().context("invalid --backend-url")?;
    }
    Ok(cfg)
}

fn load_paths(paths: &[String]) -> Result<LoadedConfig> {
    if paths.is_empty() {
        return Ok(LoadedConfig::empty());
    }
    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    load_layered_yaml(&path_refs)
}

pub fn connect(cfg: &ShopConfig) -> Result<HttpShopBackend> {
    HttpShopBackend::from_config(&cfg.backend).context("build backend client")
}

pub fn config_hash(paths: &[String]) -> Result<()> {
    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    let loaded = load_layered_yaml(&path_refs)?;
    println!("config_hash={}", loaded.config_hash);
    println!("{}", loaded.canonical_json);
    Ok(())
}
