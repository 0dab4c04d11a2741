//! Seat pricing engine
//!
//! Pure functions over an immutable [`PricingConfig`]:
//! - Tiered per-seat monthly price
//! - Billing option price at each cadence
//! - Signing fee (percentage of annual seat cost + setup/training fee)
//! - First-year total with payment method surcharge
//!
//! Unknown ids never fail; see [`super::lookup`] for the fallback rules.
//! Nothing is rounded here.

use super::breakdown::{BillingPlanQuote, PriceBreakdown};
use super::lookup::lookup;
use rust_decimal::Decimal;
use seatquote_common::{
    PaymentSchedule, PricingConfig, SeatPricingTier, Selection, SetupFeePolicy, MONTHS_PER_YEAR,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Stateless pricing engine bound to one configuration snapshot
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: Arc<PricingConfig>,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self::from_shared(Arc::new(config))
    }

    pub fn from_shared(config: Arc<PricingConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Tier containing `seats`, without fallback
    pub fn current_tier(&self, seats: u32) -> Option<&SeatPricingTier> {
        self.config.seat_tiers.iter().find(|tier| tier.contains(seats))
    }

    /// Monthly price of one seat at this seat count
    ///
    /// Seat counts outside every tier take the first tier's price.
    pub fn seat_unit_price(&self, seats: u32) -> Decimal {
        if let Some(tier) = self.current_tier(seats) {
            return tier.price_per_seat;
        }

        debug!(seats, "No tier matched, using first tier price");
        self.config
            .seat_tiers
            .first()
            .map_or(Decimal::ZERO, |tier| tier.price_per_seat)
    }

    /// Monthly cost of all seats at the base rate
    pub fn monthly_seat_total(&self, seats: u32) -> Decimal {
        Decimal::from(seats) * self.seat_unit_price(seats)
    }

    /// Yearly cost of all seats at the base rate
    pub fn annual_seat_total(&self, seats: u32) -> Decimal {
        self.monthly_seat_total(seats) * Decimal::from(MONTHS_PER_YEAR)
    }

    /// Amount billed per invoice under the given billing option
    ///
    /// - monthly: one month at the multiplied rate
    /// - quarterly: three months at the multiplied rate
    /// - annual: twelve months at the base rate, multiplier ignored
    ///
    /// An unknown option bills the base monthly total.
    pub fn billing_option_price(&self, seats: u32, billing_option_id: &str) -> Decimal {
        let monthly = self.monthly_seat_total(seats);
        let Some(option) = lookup(&self.config.billing_options, billing_option_id) else {
            return monthly;
        };

        match option.payment_schedule {
            PaymentSchedule::Annual => monthly * Decimal::from(MONTHS_PER_YEAR),
            schedule => {
                monthly * option.price_multiplier * Decimal::from(schedule.months_per_payment())
            }
        }
    }

    /// Per-seat monthly price at the given billing option's cadence
    pub fn seat_monthly_equivalent(&self, seats: u32, billing_option_id: &str) -> Decimal {
        let unit = self.seat_unit_price(seats);
        match lookup(&self.config.billing_options, billing_option_id) {
            Some(option) if option.payment_schedule != PaymentSchedule::Annual => {
                unit * option.price_multiplier
            }
            _ => unit,
        }
    }

    /// Sum of catalog prices for the selected deliverables
    ///
    /// Ids are treated as a set; unknown ids contribute nothing.
    pub fn deliverables_total<'a>(&self, selected_ids: impl IntoIterator<Item = &'a str>) -> Decimal {
        selected_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|id| lookup(&self.config.deliverables, id))
            .map(|deliverable| deliverable.price)
            .sum()
    }

    /// One-time fee at contract signing
    ///
    /// Always based on the full annual seat cost, whatever the cadence.
    pub fn signing_fee(&self, seats: u32) -> Decimal {
        self.annual_seat_total(seats) * self.config.signing_fee_percentage / Decimal::ONE_HUNDRED
            + self.config.setup_training_fee
    }

    /// Seat cost across the first year at the selected cadence
    ///
    /// Zero for an unknown option.
    pub fn seat_year_cost(&self, seats: u32, billing_option_id: &str) -> Decimal {
        lookup(&self.config.billing_options, billing_option_id).map_or(Decimal::ZERO, |option| {
            self.billing_option_price(seats, billing_option_id)
                * Decimal::from(option.payment_schedule.payments_per_year())
        })
    }

    /// Setup fee charged on its own line, on top of the one inside the signing fee
    pub fn standalone_setup_fee(&self) -> Decimal {
        match self.config.setup_fee_policy {
            SetupFeePolicy::ChargedTwice => self.config.setup_training_fee,
            SetupFeePolicy::SigningFeeOnly => Decimal::ZERO,
        }
    }

    /// First-year cost before the payment surcharge
    ///
    /// Zero for an unknown billing option.
    pub fn subtotal(&self, seats: u32, billing_option_id: &str, deliverables_total: Decimal) -> Decimal {
        if lookup(&self.config.billing_options, billing_option_id).is_none() {
            return Decimal::ZERO;
        }

        self.seat_year_cost(seats, billing_option_id)
            + self.signing_fee(seats)
            + deliverables_total
            + self.standalone_setup_fee()
    }

    /// Surcharge the payment method adds to `subtotal`; zero when unknown
    pub fn payment_surcharge(&self, subtotal: Decimal, payment_method_id: &str) -> Decimal {
        lookup(&self.config.payment_methods, payment_method_id)
            .map_or(Decimal::ZERO, |method| method.surcharge(subtotal))
    }

    /// Complete first-year cost including the payment surcharge
    ///
    /// Zero for an unknown billing option; no surcharge is added to it.
    pub fn first_year_total(
        &self,
        seats: u32,
        billing_option_id: &str,
        payment_method_id: &str,
        deliverables_total: Decimal,
    ) -> Decimal {
        if lookup(&self.config.billing_options, billing_option_id).is_none() {
            return Decimal::ZERO;
        }

        let subtotal = self.subtotal(seats, billing_option_id, deliverables_total);
        match lookup(&self.config.payment_methods, payment_method_id) {
            Some(method) => method.apply(subtotal),
            None => subtotal,
        }
    }

    /// Price every billing option at `seats`, marking the selected one
    pub fn billing_plans(&self, seats: u32, selected_id: &str) -> Vec<BillingPlanQuote> {
        self.config
            .billing_options
            .iter()
            .map(|option| BillingPlanQuote {
                id: option.id.clone(),
                name: option.display_name(),
                tag: option.tag.clone(),
                style: option.style,
                price: self.billing_option_price(seats, &option.id),
                seat_monthly_equivalent: self.seat_monthly_equivalent(seats, &option.id),
                selected: option.id == selected_id,
            })
            .collect()
    }

    /// All figures for a selection
    #[instrument(skip(self, selection), fields(seats = selection.seats, billing = %selection.billing_option_id, payment = %selection.payment_method_id))]
    pub fn breakdown(&self, selection: &Selection) -> PriceBreakdown {
        let seats = selection.seats;
        let billing_id = selection.billing_option_id.as_str();
        let payment_id = selection.payment_method_id.as_str();

        let deliverables_total =
            self.deliverables_total(selection.deliverable_ids.iter().map(String::as_str));
        let subtotal = self.subtotal(seats, billing_id, deliverables_total);
        let first_year_total = self.first_year_total(seats, billing_id, payment_id, deliverables_total);

        debug!(%subtotal, %first_year_total, "Computed breakdown");

        PriceBreakdown {
            seats,
            billing_option_id: selection.billing_option_id.clone(),
            payment_method_id: selection.payment_method_id.clone(),
            seat_unit_price: self.seat_unit_price(seats),
            monthly_total: self.monthly_seat_total(seats),
            annual_total: self.annual_seat_total(seats),
            signing_fee: self.signing_fee(seats),
            setup_training_fee: self.config.setup_training_fee,
            standalone_setup_fee: self.standalone_setup_fee(),
            deliverables_total,
            billing_plans: self.billing_plans(seats, billing_id),
            seat_year_cost: self.seat_year_cost(seats, billing_id),
            subtotal,
            payment_surcharge: first_year_total - subtotal,
            first_year_total,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
