//! Error types for SeatQuote
//!
//! Pricing itself never fails: unknown ids recover to documented defaults.
//! Errors only arise while loading or validating the static configuration
//! and at the I/O edges (export, serialization).

use thiserror::Error;

/// Result type alias using SeatQuoteError
pub type Result<T> = std::result::Result<T, SeatQuoteError>;

/// Unified error type for SeatQuote operations
#[derive(Debug, Error)]
pub enum SeatQuoteError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // File system errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Defects in the static pricing tables, detected at load time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Seat pricing tier table is empty")]
    EmptyTierTable,

    #[error("First tier starts at {first_min} seats, above the minimum of {minimum}")]
    MinimumNotCovered { first_min: u32, minimum: u32 },

    #[error("Tier {index} has an inverted range: {min_seats} > {max_seats}")]
    InvertedTier {
        index: usize,
        min_seats: u32,
        max_seats: u32,
    },

    #[error("Gap between tiers: {previous_max} is followed by {next_min}")]
    TierGap { previous_max: u32, next_min: u32 },

    #[error("Overlapping tiers: {previous_max} is followed by {next_min}")]
    TierOverlap { previous_max: u32, next_min: u32 },

    #[error("Tier starting at {min_seats} seats costs more per seat than the tier before it")]
    TierPriceIncrease { min_seats: u32 },

    #[error("Only the last tier may be unbounded (tier {index} has no maximum)")]
    UnboundedInnerTier { index: usize },

    #[error("Last tier must be unbounded, found maximum of {max_seats}")]
    BoundedLastTier { max_seats: u32 },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Negative amount for {field}: {value}")]
    NegativeAmount { field: String, value: String },

    #[error("Price multiplier must be positive for billing option {id}")]
    InvalidMultiplier { id: String },

    #[error("Failed to load configuration: {0}")]
    Load(String),
}

impl From<serde_json::Error> for SeatQuoteError {
    fn from(err: serde_json::Error) -> Self {
        SeatQuoteError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SeatQuoteError {
    fn from(err: std::io::Error) -> Self {
        SeatQuoteError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeatQuoteError::Config(ConfigError::TierGap {
            previous_max: 15,
            next_min: 17,
        });
        assert!(err.to_string().contains("15 is followed by 17"));
    }

    #[test]
    fn test_duplicate_id_error() {
        let err = ConfigError::DuplicateId {
            kind: "deliverable",
            id: "pci-dss".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate deliverable id: pci-dss");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "quote.txt");
        let err: SeatQuoteError = io.into();
        assert!(matches!(err, SeatQuoteError::Io(_)));
    }

    #[test]
    fn test_serialization_conversion() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SeatQuoteError = json.into();
        assert!(matches!(err, SeatQuoteError::Serialization(_)));
    }
}
