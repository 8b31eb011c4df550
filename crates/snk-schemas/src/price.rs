//! Fixed-point price type.
//!
//! All money amounts use a 1e-6 (micros) fixed-point representation. Prices
//! are never negative, so the raw value is a `u64`.
//!
//! # Wire format
//!
//! The backend speaks plain JSON numbers. Whole amounts are written back as
//! integers (`5`), fractional amounts as decimals (`3.5`). Negative,
//! non-finite or out-of-range numbers are rejected at decode time.
//!
//! # Arithmetic
//!
//! Totals are accumulated with [`Price::saturating_add`] and
//! [`Price::saturating_mul_qty`]; a cart total clamps at [`Price::MAX`]
//! instead of wrapping.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Micros per currency unit.
pub const MICROS_PER_UNIT: u64 = 1_000_000;

/// A non-negative monetary amount at 1e-6 scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);
    pub const MAX: Price = Price(u64::MAX);

    /// Construct from raw micros.
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Price(micros)
    }

    /// Construct from whole currency units. Saturates on overflow.
    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Price(units.saturating_mul(MICROS_PER_UNIT))
    }

    /// Raw micros.
    #[inline]
    pub const fn micros(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn saturating_add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }

    /// Multiply a per-unit price by an item count, clamping at [`Price::MAX`].
    #[inline]
    pub fn saturating_mul_qty(self, qty: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(qty)))
    }

    /// Convert a JSON-style decimal into micros, rounding to the nearest micro.
    pub fn try_from_f64(v: f64) -> Result<Self, PriceError> {
        if !v.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if v < 0.0 {
            return Err(PriceError::Negative);
        }
        let micros = (v * MICROS_PER_UNIT as f64).round();
        if micros > u64::MAX as f64 {
            return Err(PriceError::OutOfRange);
        }
        Ok(Price(micros as u64))
    }

    fn is_whole(self) -> bool {
        self.0 % MICROS_PER_UNIT == 0
    }
}

impl fmt::Display for Price {
    /// Renders `5`, `3.5`, `0.01`: no trailing zeros, no currency symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / MICROS_PER_UNIT;
        let frac = self.0 % MICROS_PER_UNIT;
        if frac == 0 {
            return write!(f, "{units}");
        }
        let digits = format!("{frac:06}");
        write!(f, "{units}.{}", digits.trim_end_matches('0'))
    }
}

/// Why a wire number could not become a [`Price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    Negative,
    NotFinite,
    OutOfRange,
}

impl fmt::Display for PriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceError::Negative => write!(f, "price must be >= 0"),
            PriceError::NotFinite => write!(f, "price must be a finite number"),
            PriceError::OutOfRange => write!(f, "price is out of range"),
        }
    }
}

impl std::error::Error for PriceError {}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_u64(self.0 / MICROS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.0 as f64 / MICROS_PER_UNIT as f64)
        }
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative number")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        v.checked_mul(MICROS_PER_UNIT)
            .map(Price)
            .ok_or_else(|| E::custom(PriceError::OutOfRange))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        let v = u64::try_from(v).map_err(|_| E::custom(PriceError::Negative))?;
        self.visit_u64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Price::try_from_f64(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}
