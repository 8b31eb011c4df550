//! Read-only catalog cache.

use serde::Serialize;
use snk_schemas::{Snack, SnackId};

/// Snacks exactly as the catalog service listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    snacks: Vec<Snack>,
}

impl Catalog {
    pub fn new(snacks: Vec<Snack>) -> Self {
        Self { snacks }
    }

    pub fn snacks(&self) -> &[Snack] {
        &self.snacks
    }

    /// First snack with `id`. The backend guarantees unique ids; if it
    /// ever sends duplicates the earliest listing wins.
    pub fn get(&self, id: SnackId) -> Option<&Snack> {
        self.snacks.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snacks.is_empty()
    }
}
