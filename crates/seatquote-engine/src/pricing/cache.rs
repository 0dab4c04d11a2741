//! In-memory quote cache
//!
//! Memoizes breakdowns on the exact selection tuple
//! `(seats, billing option, payment method, deliverables)`. Entries never
//! expire on their own; they are dropped when the configuration changes.

use super::breakdown::PriceBreakdown;
use dashmap::DashMap;
use seatquote_common::Selection;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Default number of cached selections
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Cache key components
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CacheKey<'a> {
    seats: u32,
    billing_option_id: &'a str,
    payment_method_id: &'a str,
    deliverable_ids: Vec<&'a str>,
}

impl<'a> From<&'a Selection> for CacheKey<'a> {
    fn from(selection: &'a Selection) -> Self {
        Self {
            seats: selection.seats,
            billing_option_id: &selection.billing_option_id,
            payment_method_id: &selection.payment_method_id,
            // BTreeSet iteration is sorted, so equal sets give equal keys
            deliverable_ids: selection.deliverable_ids.iter().map(String::as_str).collect(),
        }
    }
}

impl CacheKey<'_> {
    fn to_cache_key(&self, prefix: &str) -> String {
        // Ids are length-prefixed
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.seats.to_le_bytes());
        for part in [self.billing_option_id, self.payment_method_id]
            .into_iter()
            .chain(self.deliverable_ids.iter().copied())
        {
            hasher.update(&(part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        format!("{}:quote:{}", prefix, hasher.finalize().to_hex())
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached entries
    pub entry_count: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Breakdown cache using DashMap
pub struct QuoteCache {
    cache: DashMap<String, PriceBreakdown>,
    prefix: String,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QuoteCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: DashMap::new(),
            prefix: "seatquote".to_string(),
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create cache with custom key prefix
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn get(&self, selection: &Selection) -> Option<PriceBreakdown> {
        let key = CacheKey::from(selection).to_cache_key(&self.prefix);

        match self.cache.get(&key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache hit");
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache miss");
                None
            }
        }
    }

    pub fn set(&self, selection: &Selection, breakdown: &PriceBreakdown) {
        let key = CacheKey::from(selection).to_cache_key(&self.prefix);

        // Evict an entry if at capacity
        if self.cache.len() >= self.max_entries && !self.cache.contains_key(&key) {
            let victim = self.cache.iter().next().map(|entry| entry.key().clone());
            if let Some(victim) = victim {
                self.cache.remove(&victim);
            }
        }

        self.cache.insert(key, breakdown.clone());
    }

    /// Drop every entry; counters are kept
    pub fn clear(&self) {
        let entries = self.cache.len();
        self.cache.clear();
        debug!(entries, "Cleared quote cache");
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.cache.len() as u64,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingEngine;

    #[test]
    fn test_cache_key_generation() {
        let selection = Selection::new(10);
        let key = CacheKey::from(&selection).to_cache_key("test");

        assert!(key.starts_with("test:quote:"));
        assert!(key.len() > 20);
    }

    #[test]
    fn test_cache_key_is_exact_match() {
        let base = Selection::new(10).with_deliverable("pci-dss");
        let same = Selection::new(10).with_deliverable("pci-dss");
        let other = Selection::new(10).with_deliverable("kyc-aml");

        let key = |s: &Selection| CacheKey::from(s).to_cache_key("t");
        assert_eq!(key(&base), key(&same));
        assert_ne!(key(&base), key(&other));
        assert_ne!(key(&base), key(&base.clone().with_seats(11, 10)));
    }

    #[test]
    fn test_in_memory_cache() {
        let cache = QuoteCache::new(100);
        let engine = PricingEngine::default();
        let selection = Selection::new(10);

        // Should be empty initially
        assert!(cache.get(&selection).is_none());

        let breakdown = engine.breakdown(&selection);
        cache.set(&selection, &breakdown);

        let cached = cache.get(&selection);
        assert_eq!(cached.as_ref(), Some(&breakdown));

        let stats = cache.stats();
        assert_eq!(stats.entry_count, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_in_memory_cache_eviction() {
        let cache = QuoteCache::new(2);
        let engine = PricingEngine::default();

        for seats in 10..15 {
            let selection = Selection::new(10).with_seats(seats, 10);
            cache.set(&selection, &engine.breakdown(&selection));
        }

        assert!(cache.len() <= 2);
    }

    #[test]
    fn test_clear() {
        let cache = QuoteCache::default();
        let engine = PricingEngine::default();
        let selection = Selection::new(10);
        cache.set(&selection, &engine.breakdown(&selection));

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(&selection).is_none());
    }
}
