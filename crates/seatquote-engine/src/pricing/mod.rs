//! Pricing module
//!
//! Provides the seat pricing engine with:
//! - Tiered per-seat prices
//! - Billing cadence premiums
//! - Signing fee and payment surcharges
//! - Memoized breakdowns keyed on the exact selection

pub mod breakdown;
pub mod cache;
pub mod engine;
pub mod lookup;

pub use breakdown::{BillingPlanQuote, PriceBreakdown};
pub use cache::{CacheStats, QuoteCache};
pub use engine::PricingEngine;
pub use lookup::{lookup, Catalog};
