//! Failed submission.
//!
//! GREEN when:
//! - cart and selection are exactly as before the attempt
//! - the message carries the backend's error detail
//! - a later retry goes through with the same contents

use snk_client::BackendError;
use snk_session::{ShopSession, SubmitOutcome};
use snk_testkit::FakeBackend;

#[tokio::test]
async fn failure_keeps_cart_and_selection_and_reports_detail() {
    let backend = FakeBackend::with_samples();
    let mut s = ShopSession::load(&backend).await;
    s.add_to_cart(1).unwrap();
    s.add_to_cart(3).unwrap();
    s.choose_floor(Some(3)).unwrap();
    s.choose_room("302").unwrap();
    let before = s.cart().clone();

    backend.set_order_failure(Some(BackendError::Status {
        status: 503,
        body: "kitchen closed".to_string(),
    }));
    let outcome = s.submit(&backend).await.unwrap();

    assert!(!outcome.is_confirmed());
    assert_eq!(
        outcome.message(),
        "Order submission failed: backend returned http 503: kitchen closed"
    );
    match &outcome {
        SubmitOutcome::Failed { error, .. } => {
            assert!(matches!(error, BackendError::Status { status: 503, .. }))
        }
        other => panic!("unexpected {other:?}"),
    }

    assert_eq!(s.cart(), &before);
    assert_eq!(s.selection().room(), Some("302"));
    assert!(!s.is_submitting());
    assert_eq!(backend.submit_count(), 0);

    backend.set_order_failure(None);
    let retry = s.submit(&backend).await.unwrap();
    assert!(retry.is_confirmed());
    assert_ne!(retry.attempt_id(), outcome.attempt_id());
    assert_eq!(backend.submitted()[0].cart.len(), 2);
}
