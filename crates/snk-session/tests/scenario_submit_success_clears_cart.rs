//! Successful submission.
//!
//! GREEN when:
//! - the backend receives the cart lines and the selected room
//! - the cart is cleared, the floor/room selection is kept
//! - the confirmation names the total and the room

use snk_schemas::Price;
use snk_session::{ShopSession, SubmitOutcome};
use snk_testkit::FakeBackend;

#[tokio::test]
async fn success_clears_cart_and_keeps_selection() {
    let backend = FakeBackend::with_samples();
    let mut s = ShopSession::load(&backend).await;
    assert!(s.notices().is_empty());

    s.add_to_cart(1).unwrap();
    s.add_to_cart(1).unwrap();
    s.add_to_cart(2).unwrap();
    s.choose_floor(Some(3)).unwrap();
    s.choose_room("301").unwrap();
    assert!(s.can_submit());

    let outcome = s.submit(&backend).await.unwrap();
    assert!(outcome.is_confirmed(), "got {outcome:?}");
    assert_eq!(
        outcome.message(),
        "Order submitted! Total: ¥13.5, delivering to room 301"
    );

    let sent = backend.submitted();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].room_number_string, "301");
    assert_eq!(sent[0].cart.len(), 2);
    assert_eq!(sent[0].cart[0].snack.id, 1);
    assert_eq!(sent[0].cart[0].quantity, 2);
    assert_eq!(sent[0].cart[1].snack.id, 2);

    assert!(s.cart().is_empty());
    assert_eq!(s.cart().total_price(), Price::ZERO);
    assert_eq!(s.selection().floor(), Some(3));
    assert_eq!(s.selection().room(), Some("301"));
    assert!(!s.is_submitting());

    match outcome {
        SubmitOutcome::Confirmed { receipt, .. } => {
            assert_eq!(receipt.total_items, 3);
            assert_eq!(receipt.total_price, Price::from_micros(13_500_000));
            assert_eq!(receipt.ack.order_id(), Some("FAKE-000001"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn next_order_reuses_the_kept_room() {
    let backend = FakeBackend::with_samples();
    let mut s = ShopSession::load(&backend).await;
    s.choose_floor(Some(1)).unwrap();
    s.choose_room("101").unwrap();

    s.add_to_cart(3).unwrap();
    assert!(s.submit(&backend).await.unwrap().is_confirmed());
    s.add_to_cart(3).unwrap();
    assert!(s.submit(&backend).await.unwrap().is_confirmed());

    let sent = backend.submitted();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|o| o.room_number_string == "101"));
}

#[tokio::test]
async fn custom_currency_symbol_is_used_in_confirmation() {
    let backend = FakeBackend::with_samples();
    let mut s = ShopSession::load(&backend).await.with_currency_symbol("$");
    s.add_to_cart(3).unwrap();
    s.choose_floor(Some(2)).unwrap();
    s.choose_room("201").unwrap();

    let outcome = s.submit(&backend).await.unwrap();
    assert_eq!(
        outcome.message(),
        "Order submitted! Total: $1, delivering to room 201"
    );
}
