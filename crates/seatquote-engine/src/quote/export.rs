//! Quote export
//!
//! Produces a printable fixed-width text page or a JSON document. No layout
//! engine is involved; page format and orientation only set the line width
//! and the page header.

use super::document::QuoteDocument;
use chrono::{Datelike, NaiveDate};
use seatquote_common::display::{format_currency, format_currency_exact, tier_label};
use seatquote_common::{Result, QUOTE_VALIDITY_DAYS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
    Legal,
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageFormat::A4 => f.write_str("A4"),
            PageFormat::Letter => f.write_str("Letter"),
            PageFormat::Legal => f.write_str("Legal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Output encoding of an exported quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Output file name; derived from vendor and issue date when unset
    pub filename: Option<String>,
    pub format: ExportFormat,
    pub page_format: PageFormat,
    pub orientation: Orientation,
}

impl ExportOptions {
    /// Printable line width for the page setup
    pub fn columns(&self) -> usize {
        match (self.page_format, self.orientation) {
            (PageFormat::A4, Orientation::Portrait) => 78,
            (PageFormat::Letter | PageFormat::Legal, Orientation::Portrait) => 80,
            (PageFormat::A4, Orientation::Landscape) => 110,
            (PageFormat::Letter, Orientation::Landscape) => 104,
            (PageFormat::Legal, Orientation::Landscape) => 130,
        }
    }

    /// File name for `document`, e.g. `ACME-quote-2025-03-01.txt`
    pub fn filename_for(&self, document: &QuoteDocument) -> String {
        self.filename.clone().unwrap_or_else(|| {
            default_filename(&document.vendor_name, document.issued_on, self.format)
        })
    }
}

pub fn default_filename(vendor_name: &str, issued_on: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}-quote-{}.{}",
        vendor_name,
        issued_on.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Render a document in the requested format
pub fn render(document: &QuoteDocument, options: &ExportOptions) -> Result<String> {
    match options.format {
        ExportFormat::Text => Ok(render_text(document, options)),
        ExportFormat::Json => to_json(document),
    }
}

pub fn to_json(document: &QuoteDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Printable text page
pub fn render_text(document: &QuoteDocument, options: &ExportOptions) -> String {
    Printout {
        document,
        width: options.columns(),
        options,
    }
    .to_string()
}

/// Write `document` under `dir`, returning the file path
#[instrument(skip(document, options), fields(quote_id = %document.quote_id))]
pub fn write_export(document: &QuoteDocument, options: &ExportOptions, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(options.filename_for(document));
    let contents = render(document, options)?;
    std::fs::write(&path, contents)?;
    info!(path = %path.display(), format = ?options.format, "Exported quote");
    Ok(path)
}

struct Printout<'a> {
    document: &'a QuoteDocument,
    options: &'a ExportOptions,
    width: usize,
}

impl Printout<'_> {
    fn rule(&self, f: &mut fmt::Formatter<'_>, ch: char) -> fmt::Result {
        let line: String = std::iter::repeat(ch).take(self.width).collect();
        writeln!(f, "{line}")
    }

    fn row(&self, f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
        let label_width = self.width.saturating_sub(value.len() + 2).max(1);
        writeln!(f, "  {label:<label_width$}{value}")
    }

    fn centered(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        writeln!(f, "{text:^width$}", width = self.width)
    }
}

impl fmt::Display for Printout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.document;
        let b = &doc.breakdown;

        self.rule(f, '=')?;
        self.centered(f, &format!("{} <> {}", doc.vendor_name, doc.client_name))?;
        self.centered(f, "Subscription Quote")?;
        self.rule(f, '=')?;
        self.row(f, "Quote", &doc.quote_id.to_string())?;
        self.row(f, "Issued", &doc.issued_on.to_string())?;
        self.row(f, "Valid until", &doc.valid_until.to_string())?;
        self.row(
            f,
            "Page",
            &format!("{} {}", self.options.page_format, self.options.orientation),
        )?;

        writeln!(f)?;
        writeln!(f, "SEATS")?;
        self.rule(f, '-')?;
        self.row(f, "Number of seats", &b.seats.to_string())?;
        self.row(f, "Base seat price (monthly)", &format_currency(b.seat_unit_price))?;
        self.row(f, "Total monthly", &format_currency(b.monthly_total))?;
        self.row(f, "Total annual", &format_currency(b.annual_total))?;
        writeln!(f, "  Monthly pricing tiers:")?;
        let current = doc.current_tier();
        for tier in &doc.seat_tiers {
            let marker = if Some(tier) == current { ">" } else { " " };
            self.row(
                f,
                &format!("  {marker} {}", tier_label(tier)),
                &format!("{}/seat/month", format_currency(tier.price_per_seat)),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "BILLING PLANS")?;
        self.rule(f, '-')?;
        for plan in &b.billing_plans {
            let marker = if plan.selected { "[x]" } else { "[ ]" };
            let label = if plan.tag.is_empty() {
                format!("{marker} {}", plan.name)
            } else {
                format!("{marker} {} ({})", plan.name, plan.tag)
            };
            self.row(
                f,
                &label,
                &format!(
                    "{}  {}/seat per month",
                    format_currency(plan.price),
                    format_currency(plan.seat_monthly_equivalent)
                ),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "CUSTOM DELIVERABLES")?;
        self.rule(f, '-')?;
        if doc.deliverables.is_empty() {
            writeln!(f, "  None selected")?;
        }
        for deliverable in &doc.deliverables {
            self.row(f, &deliverable.name, &format_currency(deliverable.price))?;
        }
        self.row(f, "Deliverables total", &format_currency(b.deliverables_total))?;

        writeln!(f)?;
        writeln!(f, "FEES")?;
        self.rule(f, '-')?;
        self.row(
            f,
            &format!(
                "Signing fee ({}% of annual seat cost + setup fee)",
                doc.signing_fee_percentage.normalize()
            ),
            &format_currency(b.signing_fee),
        )?;
        if !b.standalone_setup_fee.is_zero() {
            self.row(f, "Setup & training fee", &format_currency(b.standalone_setup_fee))?;
        }
        let payment_name = match &doc.payment_method {
            Some(method) if method.description.is_empty() => method.name.clone(),
            Some(method) => format!("{} ({})", method.name, method.description),
            None => "Payment fee".to_string(),
        };
        self.row(f, &payment_name, &format_currency_exact(b.payment_surcharge))?;

        writeln!(f)?;
        self.rule(f, '=')?;
        self.row(f, "Seat cost, first year", &format_currency(b.seat_year_cost))?;
        self.row(f, "Subtotal", &format_currency(b.subtotal))?;
        self.row(f, "TOTAL FIRST YEAR COST", &format_currency(b.first_year_total))?;
        let payment_label = doc
            .payment_method
            .as_ref()
            .map_or("Payment Fee", |method| method.name.as_str());
        writeln!(f, "  Seats + Signing Fee + Deliverables + {payment_label}")?;
        self.rule(f, '=')?;

        if !doc.vendor_info.is_empty() {
            writeln!(f)?;
            for field in &doc.vendor_info {
                self.row(f, &field.label, &field.value)?;
            }
        }

        writeln!(f)?;
        let footer = format!(
            "{}, {} Inc. All rights reserved. Do not distribute. Pricing varies per customer \
             and quotes are only valid for a {} day period.",
            doc.issued_on.year(),
            doc.vendor_name,
            QUOTE_VALIDITY_DAYS
        );
        for line in wrap(&footer, self.width) {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Fingerprint: {}", doc.fingerprint)
    }
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
