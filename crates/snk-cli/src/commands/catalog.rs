//! `snk menu` / `snk rooms`: read-only listings.
//!
//! Unlike the session, these fail loudly: a fetch error is a non-zero exit.

use anyhow::{Context, Result};
use snk_client::ShopBackend;
use snk_config::ShopConfig;
use snk_rooms::RoomIndex;

use super::connect;

pub async fn menu(cfg: &ShopConfig) -> Result<()> {
    let backend = connect(cfg)?;
    let snacks = backend.fetch_snacks().await.context("fetch snacks")?;
    for s in &snacks {
        println!("snack id={} name={} price={}", s.id, s.name, s.price);
    }
    println!("snacks={}", snacks.len());
    Ok(())
}

pub async fn rooms(cfg: &ShopConfig) -> Result<()> {
    let backend = connect(cfg)?;
    let rooms = backend.fetch_rooms().await.context("fetch rooms")?;
    let index = RoomIndex::build(&rooms);
    for g in index.groups() {
        println!("floor={} rooms={}", g.floor, g.rooms.join(","));
    }
    println!("floors={} rooms={}", index.floor_count(), index.room_count());
    Ok(())
}
