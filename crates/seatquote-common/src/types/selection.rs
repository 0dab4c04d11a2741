//! Caller-owned selection state
//!
//! The engine never stores a selection; the front end owns it, clamps the
//! seat count, and hands it to the engine on every change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Billing option selected when none is given
pub const DEFAULT_BILLING_OPTION: &str = "monthly";

/// Payment method selected when none is given
pub const DEFAULT_PAYMENT_METHOD: &str = "ach";

/// Current calculator inputs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub seats: u32,
    pub billing_option_id: String,
    pub payment_method_id: String,
    /// Ordered so equal selections hash and serialize identically
    #[serde(default)]
    pub deliverable_ids: BTreeSet<String>,
}

impl Selection {
    /// Fresh selection at the minimum seat count with default cadence and payment
    pub fn new(minimum_seats: u32) -> Self {
        Self {
            seats: minimum_seats,
            billing_option_id: DEFAULT_BILLING_OPTION.to_string(),
            payment_method_id: DEFAULT_PAYMENT_METHOD.to_string(),
            deliverable_ids: BTreeSet::new(),
        }
    }

    /// Set the seat count, raising it to `minimum_seats` if below
    pub fn with_seats(mut self, seats: u32, minimum_seats: u32) -> Self {
        self.seats = seats.max(minimum_seats);
        self
    }

    pub fn with_billing_option(mut self, id: impl Into<String>) -> Self {
        self.billing_option_id = id.into();
        self
    }

    pub fn with_payment_method(mut self, id: impl Into<String>) -> Self {
        self.payment_method_id = id.into();
        self
    }

    pub fn with_deliverable(mut self, id: impl Into<String>) -> Self {
        self.deliverable_ids.insert(id.into());
        self
    }

    /// Check or uncheck a deliverable
    pub fn toggle_deliverable(&mut self, id: &str, selected: bool) {
        if selected {
            self.deliverable_ids.insert(id.to_string());
        } else {
            self.deliverable_ids.remove(id);
        }
    }
}

/// Parse free-form seat input; anything unparsable or below the minimum becomes the minimum
pub fn parse_seats(input: &str, minimum_seats: u32) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .unwrap_or(minimum_seats)
        .max(minimum_seats)
}
