//! Seat pricing tiers
//!
//! Tiers are ordered, contiguous seat-count ranges. Each carries the monthly
//! price of one seat for any seat count inside the range; the last tier has
//! no upper bound.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of the tiered per-seat price schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPricingTier {
    /// Lowest seat count in this tier (inclusive)
    pub min_seats: u32,
    /// Highest seat count in this tier (inclusive), `None` when unbounded
    #[serde(default)]
    pub max_seats: Option<u32>,
    /// Monthly price per seat
    pub price_per_seat: Decimal,
}

impl SeatPricingTier {
    pub fn new(min_seats: u32, max_seats: Option<u32>, price_per_seat: Decimal) -> Self {
        Self {
            min_seats,
            max_seats,
            price_per_seat,
        }
    }

    /// Whether `seats` falls inside `[min_seats, max_seats]`
    pub fn contains(&self, seats: u32) -> bool {
        seats >= self.min_seats && self.max_seats.map_or(true, |max| seats <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_seats.is_none()
    }
}
