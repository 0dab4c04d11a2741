//! Payment methods and their surcharges

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a payment method's fee is applied to the subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    /// Flat amount added once
    Fixed,
    /// Percentage of the subtotal (3 = 3%)
    Percentage,
}

/// A way of paying, with the processing surcharge it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fee_type: FeeType,
    pub fee_amount: Decimal,
}

impl PaymentMethod {
    pub fn fixed(id: impl Into<String>, name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            fee_type: FeeType::Fixed,
            fee_amount: amount,
        }
    }

    pub fn percentage(id: impl Into<String>, name: impl Into<String>, percent: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            fee_type: FeeType::Percentage,
            fee_amount: percent,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Surcharge this method adds on top of `subtotal`
    pub fn surcharge(&self, subtotal: Decimal) -> Decimal {
        match self.fee_type {
            FeeType::Fixed => self.fee_amount,
            FeeType::Percentage => subtotal * self.fee_amount / Decimal::ONE_HUNDRED,
        }
    }

    /// `subtotal` with the surcharge applied
    pub fn apply(&self, subtotal: Decimal) -> Decimal {
        match self.fee_type {
            FeeType::Fixed => subtotal + self.fee_amount,
            FeeType::Percentage => {
                subtotal * (Decimal::ONE + self.fee_amount / Decimal::ONE_HUNDRED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_fee() {
        let ach = PaymentMethod::fixed("ach", "ACH Transfer", dec!(5));
        assert_eq!(ach.apply(dec!(89360)), dec!(89365));
        assert_eq!(ach.surcharge(dec!(89360)), dec!(5));
    }

    #[test]
    fn test_percentage_fee() {
        let credit = PaymentMethod::percentage("credit", "Credit Card", dec!(3));
        assert_eq!(credit.apply(dec!(64880)), dec!(66826.40));
        assert_eq!(credit.surcharge(dec!(64880)), dec!(1946.40));
    }
}
