//! snk-config
//!
//! Layered YAML configuration shared by the `snk` CLI and the reference
//! daemon.
//!
//! Documents are merged in order (earlier = base, later = override), the
//! merged tree is canonicalized to JSON and hashed with SHA-256 so two
//! processes can cheaply tell whether they run on the same effective config.
//! Typed views live in [`shop`]; the unused-key lint lives in
//! [`consumption`].

pub mod consumption;
pub mod shop;

pub use consumption::{report_unused_keys, ConfigConsumer, UnusedKeyPolicy, UnusedKeyReport};
pub use shop::{
    BackendConfig, DaemonConfig, DisplayConfig, ShopConfig, ENV_BACKEND_URL, ENV_DAEMON_ADDR,
    ENV_DAEMON_FIXTURE, ENV_TIMEOUT_MS,
};

use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

impl LoadedConfig {
    /// An empty config: every typed view falls back to its defaults.
    pub fn empty() -> Self {
        let config_json = serde_json::json!({});
        let canonical_json = config_json.to_string();
        let config_hash = sha256_hex(canonical_json.as_bytes());
        Self {
            config_hash,
            canonical_json,
            config_json,
        }
    }
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::new();
    for p in paths {
        let raw =
            fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}"))?;
        docs.push(raw);
    }

    let doc_refs: Vec<&str> = docs.iter().map(|s| s.as_str()).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for raw in yaml_docs {
        // An empty document parses as null; treat it as "no overrides".
        let v_yaml: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        if v_yaml.is_null() {
            continue;
        }
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        merged = deep_merge(merged, v_json);
    }

    let canonical_json = canonicalize_json(&merged)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        (_, b_other) => b_other,
    }
}

fn canonicalize_json(v: &Value) -> Result<String> {
    // serde_json's default Map is ordered by key, so compact serialization is
    // already canonical for a given tree.
    serde_json::to_string(v).context("canonical json serialize failed")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
