//! Billing options - how often the seat cost is invoiced

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoicing cadence of a billing option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSchedule {
    /// Twelve payments per year
    Monthly,
    /// Four payments per year, three months each
    Quarterly,
    /// One payment per year
    Annual,
}

impl PaymentSchedule {
    /// Number of invoices in the first contract year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentSchedule::Monthly => 12,
            PaymentSchedule::Quarterly => 4,
            PaymentSchedule::Annual => 1,
        }
    }

    /// Months of service covered by a single invoice
    pub fn months_per_payment(&self) -> u32 {
        match self {
            PaymentSchedule::Monthly => 1,
            PaymentSchedule::Quarterly => 3,
            PaymentSchedule::Annual => 12,
        }
    }
}

/// Presentation emphasis for a billing option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionStyle {
    #[default]
    Default,
    /// Recommended option, rendered with emphasis
    Highlighted,
}

/// A billing cadence and the premium it carries over the base monthly rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub payment_schedule: PaymentSchedule,
    /// Multiplier relative to the base monthly rate (1.6 = 60% premium).
    /// Never applied for the annual schedule.
    pub price_multiplier: Decimal,
    /// Advertised discount; informational only
    #[serde(default)]
    pub discount_percentage: Decimal,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub style: OptionStyle,
}

impl BillingOption {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        payment_schedule: PaymentSchedule,
        price_multiplier: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            payment_schedule,
            price_multiplier,
            discount_percentage: Decimal::ZERO,
            tag: String::new(),
            style: OptionStyle::Default,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>, style: OptionStyle) -> Self {
        self.tag = tag.into();
        self.style = style;
        self
    }

    /// Display name with the advertised discount, e.g. "Annual (5% off)"
    pub fn display_name(&self) -> String {
        if self.discount_percentage > Decimal::ZERO {
            format!("{} ({}% off)", self.name, self.discount_percentage.normalize())
        } else {
            self.name.clone()
        }
    }
}
