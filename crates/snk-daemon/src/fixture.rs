//! Shop data served by the daemon.
//!
//! A fixture is a YAML document with two lists, in the same shapes as the
//! wire types:
//!
//! ```yaml
//! snacks:
//!   - { id: 1, name: chips, price: 5, image_url: /img/chips.png }
//! rooms:
//!   - { number_string: "301", floor: 3 }
//! ```

use std::collections::BTreeSet;
use std::fs;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use snk_schemas::{Price, Room, Snack};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShopFixture {
    #[serde(default)]
    pub snacks: Vec<Snack>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl ShopFixture {
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let fixture: ShopFixture =
            serde_yaml::from_str(raw).context("fixture does not match the shop schema")?;
        fixture.validate()?;
        Ok(fixture)
    }

    pub fn load(path: &str) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("failed to read fixture: {path}"))?;
        Self::from_yaml_str(&raw).with_context(|| format!("invalid fixture: {path}"))
    }

    /// Ids must be unique and room numbers non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut ids = BTreeSet::new();
        for s in &self.snacks {
            if !ids.insert(s.id) {
                bail!("duplicate snack id {}", s.id);
            }
        }
        let mut numbers = BTreeSet::new();
        for r in &self.rooms {
            if r.number_string.trim().is_empty() {
                bail!("room on floor {} has an empty number", r.floor);
            }
            if !numbers.insert(r.number_string.as_str()) {
                bail!("duplicate room {}", r.number_string);
            }
        }
        Ok(())
    }

    /// Built-in data used when no fixture path is configured.
    pub fn demo() -> Self {
        let snack = |id: i64, name: &str, price: Price| Snack {
            id,
            name: name.to_string(),
            price,
            image_url: format!("/img/{name}.png"),
        };
        let room = |number: &str, floor: i32| Room {
            number_string: number.to_string(),
            floor,
        };
        Self {
            snacks: vec![
                snack(1, "chips", Price::from_units(5)),
                snack(2, "cola", Price::from_micros(3_500_000)),
                snack(3, "chocolate", Price::from_units(8)),
                snack(4, "gum", Price::from_units(1)),
            ],
            rooms: vec![
                room("101", 1),
                room("102", 1),
                room("201", 2),
                room("301", 3),
                room("302", 3),
            ],
        }
    }
}
