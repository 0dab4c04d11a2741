//! Static pricing configuration
//!
//! Everything the engine prices against: tier table, catalogs, fees and the
//! quote header. Loaded once and never mutated; a reload replaces the whole
//! value.

use crate::error::ConfigError;
use crate::types::{
    billing::{BillingOption, OptionStyle, PaymentSchedule},
    deliverable::Deliverable,
    payment::PaymentMethod,
    tier::SeatPricingTier,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Base monthly seat price the default tier table is built around
const BASE_SEAT_PRICE: Decimal = dec!(300);

/// Whether the setup/training fee is charged again on top of the signing fee
///
/// The signing fee already includes the setup/training fee. The reference
/// first-year total adds it a second time as a standalone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupFeePolicy {
    /// Signing fee plus a standalone setup fee line (reference totals)
    #[default]
    ChargedTwice,
    /// Setup fee only counted inside the signing fee
    SigningFeeOnly,
}

/// A labelled line of the vendor block printed on quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorField {
    pub label: String,
    pub value: String,
}

impl VendorField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Complete pricing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Smallest seat count that can be quoted
    pub minimum_seats: u32,
    /// Flat setup and training fee
    pub setup_training_fee: Decimal,
    /// Percentage of annual seat cost charged at signing (10 = 10%)
    pub signing_fee_percentage: Decimal,
    pub setup_fee_policy: SetupFeePolicy,
    pub seat_tiers: Vec<SeatPricingTier>,
    pub billing_options: Vec<BillingOption>,
    pub payment_methods: Vec<PaymentMethod>,
    pub deliverables: Vec<Deliverable>,
    /// Seller shown on quote headers and export filenames
    pub vendor_name: String,
    pub client_name: String,
    pub vendor_info: Vec<VendorField>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            minimum_seats: crate::MINIMUM_SEATS,
            setup_training_fee: dec!(10000),
            signing_fee_percentage: dec!(10),
            setup_fee_policy: SetupFeePolicy::default(),
            seat_tiers: default_seat_tiers(),
            billing_options: default_billing_options(),
            payment_methods: default_payment_methods(),
            deliverables: default_deliverables(),
            vendor_name: "ACME".to_string(),
            client_name: "CustomerCo".to_string(),
            vendor_info: default_vendor_info(),
        }
    }
}

impl PricingConfig {
    /// Check the tables for defects the engine would otherwise paper over
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_tiers()?;

        for option in &self.billing_options {
            if option.price_multiplier <= Decimal::ZERO {
                return Err(ConfigError::InvalidMultiplier {
                    id: option.id.clone(),
                });
            }
        }

        check_unique("billing option", self.billing_options.iter().map(|o| o.id.as_str()))?;
        check_unique("payment method", self.payment_methods.iter().map(|m| m.id.as_str()))?;
        check_unique("deliverable", self.deliverables.iter().map(|d| d.id.as_str()))?;

        check_non_negative("setup_training_fee", self.setup_training_fee)?;
        check_non_negative("signing_fee_percentage", self.signing_fee_percentage)?;
        for method in &self.payment_methods {
            check_non_negative(&format!("payment method {}", method.id), method.fee_amount)?;
        }
        for deliverable in &self.deliverables {
            check_non_negative(&format!("deliverable {}", deliverable.id), deliverable.price)?;
        }

        Ok(())
    }

    fn validate_tiers(&self) -> Result<(), ConfigError> {
        let first = self.seat_tiers.first().ok_or(ConfigError::EmptyTierTable)?;

        if first.min_seats > self.minimum_seats {
            return Err(ConfigError::MinimumNotCovered {
                first_min: first.min_seats,
                minimum: self.minimum_seats,
            });
        }

        let last_index = self.seat_tiers.len() - 1;
        for (index, tier) in self.seat_tiers.iter().enumerate() {
            check_non_negative(&format!("tier {index} price"), tier.price_per_seat)?;

            match tier.max_seats {
                Some(max) if max < tier.min_seats => {
                    return Err(ConfigError::InvertedTier {
                        index,
                        min_seats: tier.min_seats,
                        max_seats: max,
                    });
                }
                Some(max) if index == last_index => {
                    return Err(ConfigError::BoundedLastTier { max_seats: max });
                }
                None if index != last_index => {
                    return Err(ConfigError::UnboundedInnerTier { index });
                }
                _ => {}
            }
        }

        for pair in self.seat_tiers.windows(2) {
            // Inner tiers are bounded, checked above
            let previous_max = pair[0].max_seats.unwrap_or(u32::MAX);
            let next_min = pair[1].min_seats;
            let expected = previous_max.saturating_add(1);

            if next_min > expected {
                return Err(ConfigError::TierGap {
                    previous_max,
                    next_min,
                });
            }
            if next_min < expected {
                return Err(ConfigError::TierOverlap {
                    previous_max,
                    next_min,
                });
            }
            if pair[1].price_per_seat > pair[0].price_per_seat {
                return Err(ConfigError::TierPriceIncrease { min_seats: next_min });
            }
        }

        Ok(())
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_non_negative(field: &str, value: Decimal) -> Result<(), ConfigError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConfigError::NegativeAmount {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Monthly per-seat prices, cheaper as the seat count grows
pub fn default_seat_tiers() -> Vec<SeatPricingTier> {
    vec![
        SeatPricingTier::new(6, Some(15), BASE_SEAT_PRICE + dec!(40)),
        SeatPricingTier::new(16, Some(20), BASE_SEAT_PRICE + dec!(20)),
        SeatPricingTier::new(21, Some(30), BASE_SEAT_PRICE),
        SeatPricingTier::new(31, None, BASE_SEAT_PRICE - dec!(20)),
    ]
}

pub fn default_billing_options() -> Vec<BillingOption> {
    vec![
        BillingOption::new("monthly", "Monthly", PaymentSchedule::Monthly, dec!(1.6))
            .with_description("Billed monthly (60% premium)")
            .with_tag("Most Flexible", OptionStyle::Default),
        BillingOption::new("quarterly", "Quarterly", PaymentSchedule::Quarterly, dec!(1.25))
            .with_description("(4 payments, 25% premium)")
            .with_tag("Popular", OptionStyle::Default),
        BillingOption::new("annual", "Annual", PaymentSchedule::Annual, dec!(1.0))
            .with_description("Annual payment (best value)")
            .with_tag("Best Value", OptionStyle::Highlighted),
    ]
}

pub fn default_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod::fixed("ach", "ACH Transfer", dec!(5))
            .with_description("$5 processing fee"),
        PaymentMethod::percentage("credit", "Credit Card", dec!(3))
            .with_description("3% processing fee"),
    ]
}

pub fn default_deliverables() -> Vec<Deliverable> {
    vec![
        Deliverable::new("pci-dss", "PCI DSS Compliance Integration", dec!(25000)).with_description(
            "Complete Payment Card Industry Data Security Standard compliance setup and certification support.",
        ),
        Deliverable::new("fraud-detection", "Advanced Fraud Detection Engine", dec!(35000)).with_description(
            "AI-powered real-time fraud detection system with machine learning algorithms and behavioral analysis.",
        ),
        Deliverable::new("kyc-aml", "KYC/AML Compliance Suite", dec!(20000)).with_description(
            "Know Your Customer and Anti-Money Laundering compliance tools with automated verification workflows.",
        ),
        Deliverable::new(
            "penetration-testing",
            "Penetration Testing & Vulnerability Assessment",
            dec!(22000),
        )
        .with_description(
            "Comprehensive security testing including automated scans and manual penetration testing.",
        ),
        Deliverable::new("custom-security", "Custom Security Implementation", dec!(75000)).with_description(
            "Tailored security solution designed for your specific fintech requirements. Minimum $75k.",
        ),
    ]
}

fn default_vendor_info() -> Vec<VendorField> {
    vec![
        VendorField::new("ACME POC", "Alexa Kayman, CRO, alexa@ACME.com"),
        VendorField::new("Client POC", "Jeff Bezoz, bezos@jeff.com"),
        VendorField::new("Legal Name", "ACME Inc"),
        VendorField::new("Legal Address", "100 Amanon St, San Francisco CA 94100"),
        VendorField::new("Company EIN", "33-4000000"),
        VendorField::new("Company Email", "admin@ACME.com"),
        VendorField::new("Company Phone Number", "+1 200-555-6666"),
        VendorField::new("Customer EIN", "33-5000000"),
    ]
}
