//! Priced output for a selection

use rust_decimal::Decimal;
use seatquote_common::OptionStyle;
use serde::{Deserialize, Serialize};

/// Price of one billing option at the current seat count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPlanQuote {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub style: OptionStyle,
    /// Amount billed per invoice at this cadence
    pub price: Decimal,
    /// Per-seat monthly price at this cadence
    pub seat_monthly_equivalent: Decimal,
    pub selected: bool,
}

/// Every figure the summary view displays, unrounded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub seats: u32,
    pub billing_option_id: String,
    pub payment_method_id: String,
    /// Monthly price of one seat for this seat count
    pub seat_unit_price: Decimal,
    pub monthly_total: Decimal,
    pub annual_total: Decimal,
    /// Percentage of annual seat cost plus setup/training fee
    pub signing_fee: Decimal,
    /// Configured setup/training fee, already part of `signing_fee`
    pub setup_training_fee: Decimal,
    /// Setup fee charged again on its own line; zero under `SigningFeeOnly`
    pub standalone_setup_fee: Decimal,
    pub deliverables_total: Decimal,
    /// One entry per configured billing option, in catalog order
    pub billing_plans: Vec<BillingPlanQuote>,
    /// Seat cost over the first year at the selected cadence
    pub seat_year_cost: Decimal,
    /// First-year cost before the payment surcharge
    pub subtotal: Decimal,
    pub payment_surcharge: Decimal,
    pub first_year_total: Decimal,
}

impl PriceBreakdown {
    /// The plan entry for the selected billing option, if it is in the catalog
    pub fn selected_plan(&self) -> Option<&BillingPlanQuote> {
        self.billing_plans.iter().find(|plan| plan.selected)
    }
}
