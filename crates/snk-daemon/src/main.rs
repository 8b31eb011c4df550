//! snk-daemon entry point.
//!
//! Sets up tracing, loads config and shop data, wires middleware and starts
//! the HTTP server. Config layer paths are the positional arguments.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use snk_config::{
    load_layered_yaml, report_unused_keys, ConfigConsumer, DaemonConfig, LoadedConfig,
    UnusedKeyPolicy,
};
use snk_daemon::{fixture::ShopFixture, routes, state::AppState};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env.local if present (dev convenience).
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let cfg = daemon_config(&paths)?;

    let fixture = match &cfg.fixture_path {
        Some(path) => ShopFixture::load(path)?,
        None => {
            info!("no fixture configured; serving built-in demo data");
            ShopFixture::demo()
        }
    };
    info!(
        snacks = fixture.snacks.len(),
        rooms = fixture.rooms.len(),
        "shop data loaded"
    );

    let shared = Arc::new(AppState::new(fixture));

    let app = routes::build_router(Arc::clone(&shared))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors(&cfg.allowed_origins)?);

    let addr: SocketAddr = cfg
        .addr
        .parse()
        .with_context(|| format!("invalid daemon addr '{}'", cfg.addr))?;
    info!("snk-daemon listening on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn daemon_config(paths: &[String]) -> anyhow::Result<DaemonConfig> {
    let loaded = if paths.is_empty() {
        LoadedConfig::empty()
    } else {
        let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
        load_layered_yaml(&path_refs)?
    };
    info!(config_hash = %loaded.config_hash, "config loaded");

    let report = report_unused_keys(
        ConfigConsumer::Daemon,
        &loaded.config_json,
        UnusedKeyPolicy::Warn,
    )?;
    for pointer in &report.unused_leaf_pointers {
        warn!(pointer = %pointer, "unused config key");
    }

    let mut cfg = DaemonConfig::from_loaded(&loaded)?;
    cfg.apply_env(|k| std::env::var(k).ok())?;
    Ok(cfg)
}

/// CORS: browser front ends on the configured origins only.
fn cors(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin '{o}'"))
        })
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(tower_http::cors::Any))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler failed; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
