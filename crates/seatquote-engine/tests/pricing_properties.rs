//! Property tests for the pricing engine

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use seatquote_common::{PricingConfig, Selection};
use seatquote_engine::PricingEngine;

const DELIVERABLE_IDS: [&str; 5] = [
    "pci-dss",
    "fraud-detection",
    "kyc-aml",
    "penetration-testing",
    "custom-security",
];

const BILLING_IDS: [&str; 3] = ["monthly", "quarterly", "annual"];

fn deliverable_subset() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(DELIVERABLE_IDS.to_vec(), 0..=DELIVERABLE_IDS.len())
}

proptest! {
    #[test]
    fn unit_price_never_rises_with_seats(seats in 1u32..500) {
        let engine = PricingEngine::default();
        prop_assert!(engine.seat_unit_price(seats + 1) <= engine.seat_unit_price(seats));
    }

    #[test]
    fn annual_total_is_twelve_months(seats in 0u32..10_000) {
        let engine = PricingEngine::default();
        prop_assert_eq!(
            engine.annual_seat_total(seats),
            engine.monthly_seat_total(seats) * dec!(12)
        );
    }

    #[test]
    fn deliverables_are_additive(
        left in deliverable_subset(),
        right in deliverable_subset(),
    ) {
        let engine = PricingEngine::default();
        let overlap: Vec<&str> = left.iter().copied().filter(|id| right.contains(id)).collect();

        let union = engine.deliverables_total(left.iter().chain(right.iter()).copied());
        let expected = engine.deliverables_total(left.iter().copied())
            + engine.deliverables_total(right.iter().copied())
            - engine.deliverables_total(overlap.iter().copied());

        prop_assert_eq!(union, expected);
    }

    #[test]
    fn deliverable_order_is_irrelevant(ids in deliverable_subset()) {
        let engine = PricingEngine::default();
        let reversed: Vec<&str> = ids.iter().rev().copied().collect();
        prop_assert_eq!(
            engine.deliverables_total(ids.iter().copied()),
            engine.deliverables_total(reversed.iter().copied())
        );
    }

    #[test]
    fn annual_multiplier_has_no_effect(
        seats in 10u32..200,
        multiplier in 1u32..500,
    ) {
        let reference = PricingEngine::default();
        let mut config = PricingConfig::default();
        for option in config.billing_options.iter_mut().filter(|o| o.id == "annual") {
            option.price_multiplier = Decimal::from(multiplier) / dec!(100);
        }
        let altered = PricingEngine::new(config);

        prop_assert_eq!(
            altered.seat_year_cost(seats, "annual"),
            reference.seat_year_cost(seats, "annual")
        );
    }

    #[test]
    fn clamped_selection_never_drops_below_minimum(seats in 0u32..1_000) {
        let selection = Selection::new(10).with_seats(seats, 10);
        prop_assert!(selection.seats >= 10);
        prop_assert!(selection.seats == seats || seats < 10);
    }

    #[test]
    fn breakdown_totals_are_consistent(
        seats in 10u32..120,
        billing in proptest::sample::select(BILLING_IDS.to_vec()),
        ids in deliverable_subset(),
    ) {
        let engine = PricingEngine::default();
        let mut selection = Selection::new(10)
            .with_seats(seats, 10)
            .with_billing_option(billing)
            .with_payment_method("credit");
        for id in &ids {
            selection.toggle_deliverable(id, true);
        }

        let breakdown = engine.breakdown(&selection);
        prop_assert_eq!(
            breakdown.first_year_total,
            breakdown.subtotal + breakdown.payment_surcharge
        );
        prop_assert!(breakdown.first_year_total >= breakdown.subtotal);
        prop_assert_eq!(
            breakdown.subtotal,
            engine.subtotal(seats, billing, breakdown.deliverables_total)
        );
    }
}
