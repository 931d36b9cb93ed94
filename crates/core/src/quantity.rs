//! Stock quantities.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StockError;

/// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A stock quantity.
///
/// Quantities are numeric and may be fractional or negative; only finite
/// values are representable. Integral values serialize as JSON integers so a
/// saved file reads `7` rather than `7.0`.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0.0);

    pub fn new(value: f64) -> Result<Self, StockError> {
        if !value.is_finite() {
            return Err(StockError::validation(format!(
                "quantity must be finite, got {value}"
            )));
        }
        // Fold -0.0 into 0.0 so it never prints as "-0".
        Ok(Self(value + 0.0))
    }

    pub const fn from_i32(value: i32) -> Self {
        Self(value as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_depleted(self) -> bool {
        self.0 <= 0.0
    }

    pub fn is_integral(self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INT
    }

    /// Returns `None` when the sum leaves the finite range.
    pub fn checked_add(self, rhs: Quantity) -> Option<Quantity> {
        Quantity::new(self.0 + rhs.0).ok()
    }

    /// Returns `None` when the difference leaves the finite range.
    pub fn checked_sub(self, rhs: Quantity) -> Option<Quantity> {
        Quantity::new(self.0 - rhs.0).ok()
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl TryFrom<&serde_json::Number> for Quantity {
    type Error = StockError;

    fn try_from(value: &serde_json::Number) -> Result<Self, Self::Error> {
        let as_float = value
            .as_f64()
            .ok_or_else(|| StockError::validation(format!("quantity {value} is not numeric")))?;
        Self::new(as_float)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Quantity::new(raw).map_err(serde::de::Error::custom)
    }
}
