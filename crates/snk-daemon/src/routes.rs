//! Axum router and all HTTP handlers for snk-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. Tests compose the bare router directly.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use snk_schemas::OrderRequest;
use tracing::{info, warn};

use crate::{
    api_types::{HealthResponse, OrderAcceptedResponse, OrderRejectedResponse, OrdersResponse},
    orders::{price_order, OrderRejection},
    state::AppState,
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/snacks", get(snacks))
        .route("/rooms", get(rooms))
        .route("/order", post(order))
        .route("/v1/health", get(health))
        .route("/v1/orders", get(orders))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Shop API
// ---------------------------------------------------------------------------

pub(crate) async fn snacks(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    Json(st.fixture.snacks.clone())
}

pub(crate) async fn rooms(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    Json(st.fixture.rooms.clone())
}

pub(crate) async fn order(
    State(st): State<Arc<AppState>>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rej) => return rejected(OrderRejection::Malformed(rej.body_text())),
    };

    let priced = match price_order(&st.fixture, &st.rooms, &req) {
        Ok(p) => p,
        Err(rej) => return rejected(rej),
    };

    let recorded = st.orders.write().await.record(req, priced);
    info!(
        order_id = %recorded.order_id,
        room = %recorded.room_number_string,
        items = recorded.item_count,
        total = %recorded.total_price,
        "order accepted"
    );

    (
        StatusCode::OK,
        Json(OrderAcceptedResponse {
            ok: true,
            order_id: recorded.order_id,
            total_price: recorded.total_price,
            room_number_string: recorded.room_number_string,
            item_count: recorded.item_count,
        }),
    )
        .into_response()
}

fn rejected(rej: OrderRejection) -> Response {
    warn!(reason = %rej, "order rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(OrderRejectedResponse {
            error: rej.to_string(),
        }),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// GET /v1/health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service,
            version: st.build.version,
            snacks: st.fixture.snacks.len(),
            rooms: st.rooms.room_count(),
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /v1/orders
// ---------------------------------------------------------------------------

pub(crate) async fn orders(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let orders = st.orders.read().await.orders().to_vec();
    Json(OrdersResponse { orders })
}
