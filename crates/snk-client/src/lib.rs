//! snk-client
//!
//! Boundary to the three backend services (catalog, room directory, order).
//!
//! This crate owns the backend abstraction and the HTTP implementation. It
//! holds no session state; callers (snk-session) decide what a failure means.

mod error;
mod http;

pub use error::BackendError;
pub use http::HttpShopBackend;

use snk_schemas::{OrderAck, OrderRequest, Room, Snack};

/// Backend contract.
///
/// Object-safe so the session can hold a `&dyn ShopBackend`; `Send + Sync`
/// so it can cross task boundaries.
#[async_trait::async_trait]
pub trait ShopBackend: Send + Sync {
    /// Short name for logs (e.g. `"http"`).
    fn name(&self) -> &'static str;

    /// `GET /snacks`, in backend order.
    async fn fetch_snacks(&self) -> Result<Vec<Snack>, BackendError>;

    /// `GET /rooms`, in backend order.
    async fn fetch_rooms(&self) -> Result<Vec<Room>, BackendError>;

    /// `POST /order`. Any success status is an acknowledgement.
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderAck, BackendError>;
}
