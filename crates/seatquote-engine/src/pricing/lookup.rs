//! Catalog lookup with soft failure
//!
//! Every id the engine resolves goes through [`lookup`]. A miss is logged and
//! returned as `None`; each call site then applies its own documented
//! fallback value instead of failing.

use seatquote_common::{BillingOption, Deliverable, PaymentMethod};
use tracing::debug;

/// A catalog entry addressable by id
pub trait Catalog {
    /// Entry kind, used in diagnostics
    const KIND: &'static str;

    fn id(&self) -> &str;
}

impl Catalog for BillingOption {
    const KIND: &'static str = "billing option";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Catalog for PaymentMethod {
    const KIND: &'static str = "payment method";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Catalog for Deliverable {
    const KIND: &'static str = "deliverable";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Find `id` in `entries`
pub fn lookup<'a, T: Catalog>(entries: &'a [T], id: &str) -> Option<&'a T> {
    let found = entries.iter().find(|entry| entry.id() == id);
    if found.is_none() {
        debug!(kind = T::KIND, id, "Unknown id, falling back to default");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatquote_common::PricingConfig;

    #[test]
    fn test_lookup_hit() {
        let config = PricingConfig::default();
        let option = lookup(&config.billing_options, "quarterly").unwrap();
        assert_eq!(option.name, "Quarterly");
    }

    #[test]
    fn test_lookup_miss() {
        let config = PricingConfig::default();
        assert!(lookup(&config.payment_methods, "wire").is_none());
        assert!(lookup(&config.deliverables, "").is_none());
    }
}
