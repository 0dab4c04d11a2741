//! Issued quote documents
//!
//! A document freezes one breakdown together with the catalog entries and
//! header details needed to print it later.

use crate::pricing::{lookup, PriceBreakdown, PricingEngine};
use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use seatquote_common::{
    Deliverable, PaymentMethod, SeatPricingTier, Selection, SetupFeePolicy, VendorField,
    QUOTE_VALIDITY_DAYS,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A priced selection as handed to the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDocument {
    pub quote_id: Uuid,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
    pub vendor_name: String,
    pub client_name: String,
    pub vendor_info: Vec<VendorField>,
    pub selection: Selection,
    /// Selected deliverables found in the catalog
    pub deliverables: Vec<Deliverable>,
    pub payment_method: Option<PaymentMethod>,
    pub seat_tiers: Vec<SeatPricingTier>,
    pub signing_fee_percentage: Decimal,
    pub setup_fee_policy: SetupFeePolicy,
    pub breakdown: PriceBreakdown,
    /// blake3 digest of the selection and its priced figures
    pub fingerprint: String,
}

impl QuoteDocument {
    /// Issue a quote dated today
    pub fn issue(engine: &PricingEngine, selection: &Selection) -> Self {
        Self::issue_on(engine, selection, Local::now().date_naive())
    }

    pub fn issue_on(engine: &PricingEngine, selection: &Selection, issued_on: NaiveDate) -> Self {
        let config = engine.config();
        let breakdown = engine.breakdown(selection);

        let deliverables = selection
            .deliverable_ids
            .iter()
            .filter_map(|id| lookup(&config.deliverables, id))
            .cloned()
            .collect();

        Self {
            quote_id: Uuid::new_v4(),
            issued_on,
            valid_until: issued_on + Duration::days(QUOTE_VALIDITY_DAYS),
            vendor_name: config.vendor_name.clone(),
            client_name: config.client_name.clone(),
            vendor_info: config.vendor_info.clone(),
            selection: selection.clone(),
            deliverables,
            payment_method: lookup(&config.payment_methods, &selection.payment_method_id).cloned(),
            seat_tiers: config.seat_tiers.clone(),
            signing_fee_percentage: config.signing_fee_percentage,
            setup_fee_policy: config.setup_fee_policy,
            fingerprint: fingerprint(selection, &breakdown),
            breakdown,
        }
    }

    /// Whether the quote can still be honoured on `date`
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date >= self.issued_on && date <= self.valid_until
    }

    /// The tier the quoted seat count falls in
    pub fn current_tier(&self) -> Option<&SeatPricingTier> {
        self.seat_tiers
            .iter()
            .find(|tier| tier.contains(self.selection.seats))
    }
}

/// Digest identifying a selection and the figures it priced to
pub fn fingerprint(selection: &Selection, breakdown: &PriceBreakdown) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&selection.seats.to_le_bytes());
    for part in [
        selection.billing_option_id.as_str(),
        selection.payment_method_id.as_str(),
    ]
    .into_iter()
    .chain(selection.deliverable_ids.iter().map(String::as_str))
    {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }

    for amount in [
        breakdown.seat_unit_price,
        breakdown.signing_fee,
        breakdown.deliverables_total,
        breakdown.seat_year_cost,
        breakdown.subtotal,
        breakdown.first_year_total,
    ] {
        hasher.update(amount.normalize().to_string().as_bytes());
        hasher.update(b"|");
    }

    hasher.finalize().to_hex().to_string()
}
