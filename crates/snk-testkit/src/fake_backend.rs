use std::sync::Mutex;

use serde_json::json;
use snk_client::{BackendError, ShopBackend};
use snk_schemas::{OrderAck, OrderRequest, Room, Snack};

/// In-memory backend.
///
/// Serves fixed snacks/rooms, records every submitted order and can be told
/// to fail any of the three calls.
#[derive(Debug, Default)]
pub struct FakeBackend {
    snacks: Vec<Snack>,
    rooms: Vec<Room>,
    fail_snacks: Option<BackendError>,
    fail_rooms: Option<BackendError>,
    fail_orders: Mutex<Option<BackendError>>,
    submitted: Mutex<Vec<OrderRequest>>,
}

impl FakeBackend {
    pub fn new(snacks: Vec<Snack>, rooms: Vec<Room>) -> Self {
        Self {
            snacks,
            rooms,
            ..Self::default()
        }
    }

    /// [`crate::sample_snacks`] and [`crate::sample_rooms`].
    pub fn with_samples() -> Self {
        Self::new(crate::sample_snacks(), crate::sample_rooms())
    }

    pub fn failing_snacks(mut self, err: BackendError) -> Self {
        self.fail_snacks = Some(err);
        self
    }

    pub fn failing_rooms(mut self, err: BackendError) -> Self {
        self.fail_rooms = Some(err);
        self
    }

    /// Make every following `submit_order` fail with `err` (or succeed
    /// again with `None`).
    pub fn set_order_failure(&self, err: Option<BackendError>) {
        *lock(&self.fail_orders) = err;
    }

    pub fn submitted(&self) -> Vec<OrderRequest> {
        lock(&self.submitted).clone()
    }

    pub fn submit_count(&self) -> usize {
        lock(&self.submitted).len()
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    // A panicking test thread must not hide the recorded state from others.
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait::async_trait]
impl ShopBackend for FakeBackend {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch_snacks(&self) -> Result<Vec<Snack>, BackendError> {
        match &self.fail_snacks {
            Some(err) => Err(err.clone()),
            None => Ok(self.snacks.clone()),
        }
    }

    async fn fetch_rooms(&self) -> Result<Vec<Room>, BackendError> {
        match &self.fail_rooms {
            Some(err) => Err(err.clone()),
            None => Ok(self.rooms.clone()),
        }
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderAck, BackendError> {
        if let Some(err) = lock(&self.fail_orders).clone() {
            return Err(err);
        }
        let mut submitted = lock(&self.submitted);
        submitted.push(order.clone());
        Ok(OrderAck(json!({
            "ok": true,
            "order_id": format!("FAKE-{:06}", submitted.len()),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_orders_and_numbers_acks() {
        let b = FakeBackend::with_samples();
        let req = OrderRequest {
            cart: vec![],
            room_number_string: "301".to_string(),
        };
        let ack = b.submit_order(&req).await.unwrap();
        assert_eq!(ack.order_id(), Some("FAKE-000001"));
        assert_eq!(b.submitted(), vec![req]);
    }

    #[tokio::test]
    async fn scripted_order_failure_is_returned_and_not_recorded() {
        let b = FakeBackend::with_samples();
        b.set_order_failure(Some(BackendError::Transport("down".to_string())));
        let req = OrderRequest {
            cart: vec![],
            room_number_string: "301".to_string(),
        };
        assert!(b.submit_order(&req).await.is_err());
        assert_eq!(b.submit_count(), 0);
    }
}
