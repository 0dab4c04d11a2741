//! # SeatQuote Engine
//!
//! Pricing engine and quote export for the SeatQuote subscription
//! calculator.
//!
//! ## First-Year Formula
//!
//! ```text
//! Total = Surcharge(SeatYear + SigningFee + Deliverables + Setup)
//! ```
//!
//! Where:
//! - SeatYear: seat cost at the selected cadence, annualized
//! - SigningFee: signing-fee percentage of annual seat cost + setup fee
//! - Deliverables: one-time add-ons
//! - Setup: standalone setup/training fee (see [`seatquote_common::SetupFeePolicy`])
//! - Surcharge: fixed or percentage payment method fee

pub mod pricing;
pub mod quote;
pub mod service;

pub use pricing::{BillingPlanQuote, PriceBreakdown, PricingEngine, QuoteCache};
pub use quote::{ExportFormat, ExportOptions, QuoteDocument};
pub use service::QuoteService;
