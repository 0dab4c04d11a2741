//! Quote service
//!
//! Holds the active engine and a breakdown cache. Reconfiguration swaps the
//! whole engine at once; readers see either the old tables or the new ones,
//! never a mix.

use crate::pricing::{CacheStats, PriceBreakdown, PricingEngine, QuoteCache};
use parking_lot::RwLock;
use seatquote_common::{PricingConfig, Result, Selection};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct QuoteService {
    engine: RwLock<Arc<PricingEngine>>,
    cache: QuoteCache,
}

impl QuoteService {
    /// Create a service over a validated configuration
    pub fn new(config: PricingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_cache(PricingEngine::new(config), QuoteCache::default()))
    }

    pub fn with_cache(engine: PricingEngine, cache: QuoteCache) -> Self {
        Self {
            engine: RwLock::new(Arc::new(engine)),
            cache,
        }
    }

    /// Snapshot of the active engine
    pub fn engine(&self) -> Arc<PricingEngine> {
        Arc::clone(&self.engine.read())
    }

    /// Breakdown for a selection, memoized on the exact selection
    #[instrument(skip(self, selection), fields(seats = selection.seats))]
    pub fn quote(&self, selection: &Selection) -> PriceBreakdown {
        // Held until the result is cached so a concurrent reconfigure cannot interleave
        let engine = self.engine.read();
        if let Some(cached) = self.cache.get(selection) {
            return cached;
        }

        let breakdown = engine.breakdown(selection);
        self.cache.set(selection, &breakdown);
        breakdown
    }

    /// Replace the pricing tables
    ///
    /// On validation failure the active configuration stays in place.
    #[instrument(skip(self, config))]
    pub fn reconfigure(&self, config: PricingConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "Rejected pricing configuration");
            return Err(err.into());
        }

        let mut engine = self.engine.write();
        *engine = Arc::new(PricingEngine::new(config));
        self.cache.clear();
        info!("Pricing configuration replaced");
        Ok(())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use seatquote_common::{ConfigError, SeatQuoteError};

    #[test]
    fn test_quote_is_memoized() {
        let service = QuoteService::new(PricingConfig::default()).unwrap();
        let selection = Selection::new(10);

        let first = service.quote(&selection);
        let second = service.quote(&selection);

        assert_eq!(first, second);
        assert_eq!(first.first_year_total, dec!(89365));
        let stats = service.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = PricingConfig {
            seat_tiers: vec![],
            ..Default::default()
        };
        assert!(matches!(
            QuoteService::new(config),
            Err(SeatQuoteError::Config(ConfigError::EmptyTierTable))
        ));
    }

    #[test]
    fn test_reconfigure_replaces_tables_and_invalidates() {
        let service = QuoteService::new(PricingConfig::default()).unwrap();
        let selection = Selection::new(10);
        assert_eq!(service.quote(&selection).seat_unit_price, dec!(340));

        let mut config = PricingConfig::default();
        config.seat_tiers[0].price_per_seat = dec!(400);
        service.reconfigure(config).unwrap();

        assert_eq!(service.cache_stats().entry_count, 0);
        assert_eq!(service.quote(&selection).seat_unit_price, dec!(400));
    }

    #[test]
    fn test_failed_reconfigure_keeps_previous_tables() {
        let service = QuoteService::new(PricingConfig::default()).unwrap();
        let before = service.engine();

        let mut config = PricingConfig::default();
        config.seat_tiers[1].min_seats = 18;
        assert!(service.reconfigure(config).is_err());

        assert_eq!(service.engine().config(), before.config());
    }
}
