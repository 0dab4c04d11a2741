//! Presentation formatting
//!
//! The engine never rounds. Figures are rounded here, at display time only.

use crate::types::tier::SeatPricingTier;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-unit currency, e.g. `$89,365`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    with_symbol(&group_thousands(&rounded.trunc().abs().to_string()), rounded)
}

/// Currency with cents, e.g. `$66,826.40`
pub fn format_currency_exact(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    with_symbol(&format!("{}.{}", group_thousands(whole), cents), rounded)
}

/// Seat range label, e.g. `6-15 seats` or `31+ seats`
pub fn tier_label(tier: &SeatPricingTier) -> String {
    match tier.max_seats {
        Some(max) if max == tier.min_seats => format!("{} seats", tier.min_seats),
        Some(max) => format!("{}-{} seats", tier.min_seats, max),
        None => format!("{}+ seats", tier.min_seats),
    }
}

fn with_symbol(digits: &str, amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(340)), "$340");
        assert_eq!(format_currency(dec!(3400)), "$3,400");
        assert_eq!(format_currency(dec!(89365)), "$89,365");
        assert_eq!(format_currency(dec!(1234567.89)), "$1,234,568");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(66826.40)), "$66,826");
        assert_eq!(format_currency(dec!(999.5)), "$1,000");
        assert_eq!(format_currency(dec!(-1500.4)), "-$1,500");
    }

    #[test]
    fn test_format_currency_exact() {
        assert_eq!(format_currency_exact(dec!(66826.4)), "$66,826.40");
        assert_eq!(format_currency_exact(dec!(5)), "$5.00");
        assert_eq!(format_currency_exact(dec!(1946.405)), "$1,946.41");
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(tier_label(&SeatPricingTier::new(6, Some(15), dec!(340))), "6-15 seats");
        assert_eq!(tier_label(&SeatPricingTier::new(31, None, dec!(280))), "31+ seats");
        assert_eq!(tier_label(&SeatPricingTier::new(5, Some(5), dec!(350))), "5 seats");
    }
}
