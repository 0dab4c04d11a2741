//! Output formatting for the seatquote CLI

use crate::cli::OutputFormat;
use anyhow::Result;
use rust_decimal::Decimal;
use seatquote_common::display::{format_currency, format_currency_exact, tier_label};
use seatquote_common::{FeeType, OptionStyle, PricingConfig, SeatPricingTier};
use seatquote_engine::{BillingPlanQuote, PriceBreakdown, QuoteDocument};
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;
use std::path::Path;

const LABEL_WIDTH: usize = 32;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn row(out: &mut String, label: &str, amount: Decimal) -> Result<()> {
    writeln!(out, "  {label:<LABEL_WIDTH$}{:>14}", format_currency(amount))?;
    Ok(())
}

/// Full breakdown for one selection
pub fn breakdown(b: &PriceBreakdown, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(b);
    }

    let mut out = String::new();
    writeln!(
        out,
        "{} seats at {}/seat/month, billed {}, paid by {}\n",
        b.seats,
        format_currency(b.seat_unit_price),
        b.billing_option_id,
        b.payment_method_id
    )?;

    writeln!(out, "Seats")?;
    row(&mut out, "Monthly total", b.monthly_total)?;
    row(&mut out, "Annual total", b.annual_total)?;

    writeln!(out, "\nBilling plans")?;
    out.push_str(&plans_table(&b.billing_plans)?);

    writeln!(out, "\nFirst year")?;
    row(&mut out, "Seat cost", b.seat_year_cost)?;
    row(&mut out, "Signing fee", b.signing_fee)?;
    if !b.standalone_setup_fee.is_zero() {
        row(&mut out, "Setup & training fee", b.standalone_setup_fee)?;
    }
    row(&mut out, "Deliverables", b.deliverables_total)?;
    row(&mut out, "Subtotal", b.subtotal)?;
    writeln!(
        out,
        "  {:<LABEL_WIDTH$}{:>14}",
        "Payment surcharge",
        format_currency_exact(b.payment_surcharge)
    )?;
    out.push_str(&"-".repeat(LABEL_WIDTH + 16));
    out.push('\n');
    writeln!(
        out,
        "  {:<LABEL_WIDTH$}{:>14}",
        "First year total",
        format_currency(b.first_year_total)
    )?;
    writeln!(out, "  {:<LABEL_WIDTH$}{:>14}", "", format_currency_exact(b.first_year_total))?;

    Ok(out)
}

/// Every billing option at one seat count
pub fn plans(plans: &[BillingPlanQuote], seats: u32, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&json!({ "seats": seats, "billing_plans": plans }));
    }

    let mut out = format!("Billing plans for {seats} seats\n\n");
    out.push_str(&plans_table(plans)?);
    Ok(out)
}

fn plans_table(plans: &[BillingPlanQuote]) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "  {:<2}{:<24} {:>14} {:>16}  {}",
        "", "Plan", "Per invoice", "Per seat/month", "Tag"
    )?;
    for plan in plans {
        let marker = if plan.selected { "*" } else { "" };
        let tag = match plan.style {
            OptionStyle::Highlighted => format!("{} (recommended)", plan.tag),
            OptionStyle::Default => plan.tag.clone(),
        };
        writeln!(
            out,
            "  {marker:<2}{:<24} {:>14} {:>16}  {}",
            plan.name,
            format_currency(plan.price),
            format_currency(plan.seat_monthly_equivalent),
            tag.trim()
        )?;
    }
    Ok(out)
}

/// Tier table, marking the tier that contains the current seat count
pub fn tiers(
    tiers: &[SeatPricingTier],
    current: Option<&SeatPricingTier>,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&json!({ "seat_tiers": tiers, "current_tier": current }));
    }

    let mut out = String::from("Monthly pricing tiers\n\n");
    for tier in tiers {
        let marker = if Some(tier) == current { ">" } else { " " };
        writeln!(
            out,
            "  {marker} {:<16}{:>10}/seat/month",
            tier_label(tier),
            format_currency(tier.price_per_seat)
        )?;
    }
    Ok(out)
}

/// Deliverables and payment methods
pub fn catalog(config: &PricingConfig, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&json!({
            "deliverables": config.deliverables,
            "payment_methods": config.payment_methods,
        }));
    }

    let mut out = String::from("Deliverables\n\n");
    if config.deliverables.is_empty() {
        out.push_str("  None configured\n");
    }
    for deliverable in &config.deliverables {
        writeln!(
            out,
            "  {:<24}{:<30}{:>12}",
            deliverable.id,
            deliverable.name,
            format_currency(deliverable.price)
        )?;
    }

    out.push_str("\nPayment methods\n\n");
    for method in &config.payment_methods {
        let fee = match method.fee_type {
            FeeType::Fixed => format!("{} fee", format_currency_exact(method.fee_amount)),
            FeeType::Percentage => format!("{}% fee", method.fee_amount.normalize()),
        };
        writeln!(out, "  {:<24}{:<30}{:>12}", method.id, method.name, fee)?;
    }
    Ok(out)
}

/// Confirmation after a quote was written to disk
pub fn exported(document: &QuoteDocument, path: &Path, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&json!({
            "path": path.display().to_string(),
            "quote_id": document.quote_id,
            "valid_until": document.valid_until,
            "first_year_total": document.breakdown.first_year_total,
            "fingerprint": document.fingerprint,
        }));
    }

    Ok(format!(
        "Quote {} written to {}\n  First year total: {}\n  Valid until: {}",
        document.quote_id,
        path.display(),
        format_currency(document.breakdown.first_year_total),
        document.valid_until
    ))
}

/// Summary of a configuration that passed validation
pub fn config_ok(config: &PricingConfig, source: &Path, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&json!({
            "valid": true,
            "source": source.display().to_string(),
            "minimum_seats": config.minimum_seats,
            "tiers": config.seat_tiers.len(),
            "billing_options": config.billing_options.len(),
            "payment_methods": config.payment_methods.len(),
            "deliverables": config.deliverables.len(),
            "setup_fee_policy": config.setup_fee_policy,
        }));
    }

    let origin = if source.exists() {
        source.display().to_string()
    } else {
        "built-in catalog".to_string()
    };
    Ok(format!(
        "Configuration OK ({origin})\n  Minimum seats: {}\n  Tiers: {}\n  Billing options: {}\n  Payment methods: {}\n  Deliverables: {}",
        config.minimum_seats,
        config.seat_tiers.len(),
        config.billing_options.len(),
        config.payment_methods.len(),
        config.deliverables.len()
    ))
}

/// Error report; JSON callers get a machine-readable object
pub fn error(err: &anyhow::Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format!("Error: {err:#}"),
        OutputFormat::Json => json!({ "success": false, "error": format!("{err:#}") }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatquote_common::{Selection, SetupFeePolicy};
    use seatquote_engine::PricingEngine;

    #[test]
    fn test_breakdown_human() {
        let engine = PricingEngine::default();
        let b = engine.breakdown(&Selection::new(10));
        let out = breakdown(&b, OutputFormat::Human).unwrap();

        assert!(out.contains("10 seats at $340/seat/month"));
        assert!(out.contains("$89,365"));
        assert!(out.contains("$89,365.00"));
        assert!(out.contains("*"));
    }

    #[test]
    fn test_setup_fee_line_follows_policy() {
        let selection = Selection::new(10);

        let charged = breakdown(&PricingEngine::default().breakdown(&selection), OutputFormat::Human)
            .unwrap();
        assert!(charged.contains("Setup & training fee"));

        let engine = PricingEngine::new(PricingConfig {
            setup_fee_policy: SetupFeePolicy::SigningFeeOnly,
            ..Default::default()
        });
        let out = breakdown(&engine.breakdown(&selection), OutputFormat::Human).unwrap();
        assert!(!out.contains("Setup & training fee"));
        assert!(out.contains("$79,360"));
    }

    #[test]
    fn test_surcharge_shows_cents() {
        let engine = PricingEngine::default();
        let b = engine.breakdown(
            &Selection::new(10)
                .with_billing_option("annual")
                .with_payment_method("credit"),
        );
        let out = breakdown(&b, OutputFormat::Human).unwrap();

        assert!(out.contains("$1,946.40"));
        assert!(out.contains("$66,826.40"));
    }

    #[test]
    fn test_breakdown_json_round_trips() {
        let engine = PricingEngine::default();
        let b = engine.breakdown(&Selection::new(10).with_payment_method("credit"));
        let out = breakdown(&b, OutputFormat::Json).unwrap();

        let parsed: PriceBreakdown = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, b);
    }

    #[test]
    fn test_tiers_marks_current() {
        let config = PricingConfig::default();
        let out = tiers(&config.seat_tiers, config.seat_tiers.get(3), OutputFormat::Human).unwrap();

        assert!(out.contains("> 31+ seats"));
        assert!(out.contains("  6-15 seats"));
    }

    #[test]
    fn test_catalog_lists_fees() {
        let out = catalog(&PricingConfig::default(), OutputFormat::Human).unwrap();
        assert!(out.contains("pci-dss"));
        assert!(out.contains("$5.00 fee"));
        assert!(out.contains("3% fee"));
    }

    #[test]
    fn test_error_json() {
        let err = anyhow::anyhow!("boom");
        let out = error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
    }
}
