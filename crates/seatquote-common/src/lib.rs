//! # SeatQuote Common
//!
//! Shared types, static pricing configuration, and errors for the SeatQuote
//! subscription pricing calculator.
//!
//! ## Core Types
//!
//! - [`SeatPricingTier`]: tiered monthly per-seat price schedule
//! - [`BillingOption`]: invoicing cadence and its premium multiplier
//! - [`PaymentMethod`]: fixed or percentage processing surcharge
//! - [`Deliverable`]: optional one-time add-on
//! - [`Selection`]: caller-owned calculator inputs
//! - [`PricingConfig`]: every table and constant the engine prices against
//!
//! All monetary amounts are [`rust_decimal::Decimal`].

pub mod config;
pub mod display;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use config::{PricingConfig, SetupFeePolicy, VendorField};
pub use error::{ConfigError, Result, SeatQuoteError};
pub use types::{
    billing::{BillingOption, OptionStyle, PaymentSchedule},
    deliverable::Deliverable,
    payment::{FeeType, PaymentMethod},
    selection::{parse_seats, Selection},
    tier::SeatPricingTier,
};

/// SeatQuote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum number of seats that can be quoted
pub const MINIMUM_SEATS: u32 = 10;

/// Months in a contract year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Days an issued quote remains valid
pub const QUOTE_VALIDITY_DAYS: i64 = 30;

/// Target pricing calculation latency in milliseconds
pub const TARGET_PRICING_LATENCY_MS: u64 = 10;
