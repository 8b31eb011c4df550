//! `snk order`: one-shot cart build + submit.

use anyhow::{anyhow, bail, Context, Result};
use snk_config::ShopConfig;
use snk_schemas::{Floor, SnackId};
use snk_session::{ShopSession, SubmitOutcome};

use super::connect;

pub async fn run(cfg: &ShopConfig, items: &[SnackId], floor: Floor, room: &str) -> Result<()> {
    let backend = connect(cfg)?;
    let mut session = ShopSession::load(&backend)
        .await
        .with_currency_symbol(cfg.display.currency_symbol.clone());

    // A one-shot order cannot proceed on partial data.
    if let Some(notice) = session.notices().first() {
        bail!("{notice}");
    }

    for &id in items {
        session.add_to_cart(id)?;
    }
    session
        .choose_floor(Some(floor))
        .context("invalid --floor")?;
    session
        .choose_room(room)
        .context("invalid --room")?;

    let outcome = session
        .submit(&backend)
        .await
        .map_err(|blocked| anyhow!("cannot submit: {blocked}"))?;

    match outcome {
        SubmitOutcome::Confirmed { receipt, message } => {
            println!(
                "order_submitted=true attempt_id={} room={} total_items={} total_price={}",
                receipt.attempt_id,
                receipt.room_number_string,
                receipt.total_items,
                receipt.total_price
            );
            if let Some(order_id) = receipt.ack.order_id() {
                println!("order_id={order_id}");
            }
            println!("{message}");
            Ok(())
        }
        SubmitOutcome::Failed { message, .. } | SubmitOutcome::Stale { message, .. } => {
            bail!("{message}")
        }
    }
}
