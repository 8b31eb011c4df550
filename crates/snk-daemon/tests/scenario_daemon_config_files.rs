//! Shipped config and fixture files stay loadable.

use snk_config::{
    load_layered_yaml, report_unused_keys, ConfigConsumer, DaemonConfig, ShopConfig,
    UnusedKeyPolicy,
};
use snk_daemon::fixture::ShopFixture;
use std::path::PathBuf;

fn repo_path(rel: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(rel)
        .to_string_lossy()
        .to_string()
}

#[test]
fn base_config_is_clean_for_both_consumers() {
    let base = repo_path("config/defaults/base.yaml");
    let loaded = load_layered_yaml(&[base.as_str()]).unwrap();

    for consumer in [ConfigConsumer::Client, ConfigConsumer::Daemon] {
        let report =
            report_unused_keys(consumer, &loaded.config_json, UnusedKeyPolicy::Fail).unwrap();
        assert!(report.is_clean());
    }

    let daemon = DaemonConfig::from_loaded(&loaded).unwrap();
    assert_eq!(daemon.addr, "127.0.0.1:8000");
    let client = ShopConfig::from_loaded(&loaded).unwrap();
    assert_eq!(client.backend.base_url, "http://127.0.0.1:8000");
}

#[test]
fn demo_fixture_loads() {
    let f = ShopFixture::load(&repo_path("config/fixtures/demo_shop.yaml")).unwrap();
    assert_eq!(f.snacks.len(), 5);
    assert_eq!(f.rooms.last().unwrap().floor, -1);
}
