use serde::{Serialize, Serializer};
use std::fmt;

use crate::product::CatalogError;

/// Flat surcharge applied to every flight fare (taxes and fees)
pub const FLIGHT_SURCHARGE_PERCENT: u64 = 18;

/// Non-negative monetary amount, stored in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build an amount from a decimal value, rounding to the nearest cent
    pub fn from_decimal(value: f64) -> Result<Self, CatalogError> {
        if !value.is_finite() {
            return Err(CatalogError::InvalidEntity(format!(
                "price must be a finite number, got {}",
                value
            )));
        }

        if value < 0.0 {
            return Err(CatalogError::InvalidEntity(format!(
                "price must not be negative, got {:.2}",
                value
            )));
        }

        Ok(Self {
            cents: (value * 100.0).round() as u64,
        })
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by `numerator / denominator`, rounding half up to the cent
    pub fn scale(&self, numerator: u64, denominator: u64) -> Money {
        debug_assert!(denominator > 0);
        let scaled = (self.cents as u128 * numerator as u128 + denominator as u128 / 2)
            / denominator as u128;

        Money {
            cents: u64::try_from(scaled).unwrap_or(u64::MAX),
        }
    }
}

/// Serialized as a decimal amount (`236.0`), never as raw cents
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Pricing formula attached to each item variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingRule {
    /// Base price plus a fixed percentage
    FlatSurcharge { percent: u64 },

    /// Ten percent per star on top of the base price
    StarRating { rating: u8 },

    /// Luxury cars cost half as much again
    LuxuryPremium,

    /// Sold at base price
    Base,
}

impl PricingRule {
    pub fn apply(&self, base_price: Money) -> Money {
        match *self {
            PricingRule::FlatSurcharge { percent } => base_price.scale(100 + percent, 100),
            PricingRule::StarRating { rating } => base_price.scale(10 + rating as u64, 10),
            PricingRule::LuxuryPremium => base_price.scale(3, 2),
            PricingRule::Base => base_price,
        }
    }
}
