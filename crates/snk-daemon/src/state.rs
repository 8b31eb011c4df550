//! Shared runtime state for snk-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. Shop data is immutable
//! after boot; only the order book is behind a lock.

use std::sync::Arc;

use snk_rooms::RoomIndex;
use tokio::sync::RwLock;

use crate::fixture::ShopFixture;
use crate::orders::OrderBook;

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Static build metadata included in health responses.
#[derive(Clone, Debug)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub build: BuildInfo,
    pub fixture: ShopFixture,
    /// Built once from `fixture.rooms`.
    pub rooms: RoomIndex,
    pub orders: RwLock<OrderBook>,
}

impl AppState {
    pub fn new(fixture: ShopFixture) -> Self {
        let rooms = RoomIndex::build(&fixture.rooms);
        Self {
            build: BuildInfo {
                service: "snk-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            fixture,
            rooms,
            orders: RwLock::new(OrderBook::new()),
        }
    }

    pub fn demo() -> Arc<Self> {
        Arc::new(Self::new(ShopFixture::demo()))
    }
}
