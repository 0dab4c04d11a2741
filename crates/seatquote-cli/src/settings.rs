//! Layered pricing configuration
//!
//! Sources, lowest precedence first: built-in catalog, optional config
//! file, `SEATQUOTE__*` environment variables (after `.env` is read).

use seatquote_common::{ConfigError, PricingConfig};
use std::path::Path;
use tracing::{debug, info};

/// Environment prefix, e.g. `SEATQUOTE__MINIMUM_SEATS=12`
pub const ENV_PREFIX: &str = "SEATQUOTE";

/// Load and validate the pricing configuration
pub fn load(path: &Path) -> Result<PricingConfig, ConfigError> {
    // Try to load .env file
    let _ = dotenvy::dotenv();

    if !path.exists() {
        debug!(path = %path.display(), "No config file, using built-in catalog");
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let pricing: PricingConfig = settings
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    pricing.validate()?;

    info!(
        tiers = pricing.seat_tiers.len(),
        billing_options = pricing.billing_options.len(),
        payment_methods = pricing.payment_methods.len(),
        deliverables = pricing.deliverables.len(),
        "Loaded pricing configuration"
    );
    Ok(pricing)
}
