//! `reqwest`-backed [`ShopBackend`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use snk_config::BackendConfig;
use snk_schemas::{OrderAck, OrderRequest, Room, Snack};
use tracing::debug;

use crate::{BackendError, ShopBackend};

/// HTTP client for the snack shop backend.
#[derive(Debug, Clone)]
pub struct HttpShopBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpShopBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BackendError::Config("base url must not be empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Config(format!("http client build failed: {e}")))?;
        Ok(Self { http, base_url })
    }

    pub fn from_config(cfg: &BackendConfig) -> Result<Self, BackendError> {
        Self::new(cfg.base_url.clone(), Duration::from_millis(cfg.timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send, then split the response into (status, body text).
    async fn exchange(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<(reqwest::StatusCode, String), BackendError> {
        let resp = req
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| BackendError::Transport(format!("reading response body: {e}")))?;
        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let (status, body) = self.exchange(self.http.get(&url)).await?;
        if !status.is_success() {
            return Err(BackendError::status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| BackendError::Decode(format!("GET {path}: {e}")))
    }
}

#[async_trait::async_trait]
impl ShopBackend for HttpShopBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_snacks(&self) -> Result<Vec<Snack>, BackendError> {
        self.get_json("/snacks").await
    }

    async fn fetch_rooms(&self) -> Result<Vec<Room>, BackendError> {
        self.get_json("/rooms").await
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderAck, BackendError> {
        let url = self.url("/order");
        debug!(%url, lines = order.cart.len(), room = %order.room_number_string, "POST");
        let (status, body) = self.exchange(self.http.post(&url).json(order)).await?;
        if !status.is_success() {
            return Err(BackendError::status(status.as_u16(), &body));
        }
        Ok(parse_ack(&body))
    }
}

/// Any 2xx is an acknowledgement. JSON bodies are kept as-is, an empty body
/// is `null`, anything else is kept as a string.
fn parse_ack(body: &str) -> OrderAck {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return OrderAck::empty();
    }
    match serde_json::from_str(trimmed) {
        Ok(v) => OrderAck(v),
        Err(_) => OrderAck(serde_json::Value::String(trimmed.to_string())),
    }
}
