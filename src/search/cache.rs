//! Transposition cache
//!
//! Maps a position to the utility computed for it. Keys are positions only;
//! the stored utility also depends on the color of interest of the search
//! that produced it. Within one move decision that color never changes, so
//! the cache is sound there, but it must be cleared before every decision.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::Utility;

/// Lookup counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub lookups: u64,
    pub hits: u64,
    pub stores: u64,
}

impl CacheStats {
    /// Hit rate in percent, 0 when nothing was looked up
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            (self.hits as f64 / self.lookups as f64) * 100.0
        }
    }
}

/// Position -> utility memo table owned by one move selector
#[derive(Debug, Clone)]
pub struct TranspositionCache<B> {
    entries: HashMap<B, Utility>,
    stats: CacheStats,
}

impl<B: Eq + Hash> Default for TranspositionCache<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Eq + Hash> TranspositionCache<B> {
    #[must_use]
    pub fn new() -> Self {
        TranspositionCache {
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Looks up a position, counting the probe
    pub fn probe(&mut self, board: &B) -> Option<Utility> {
        self.stats.lookups += 1;
        let hit = self.entries.get(board).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Looks up a position without touching the counters
    #[must_use]
    pub fn peek(&self, board: &B) -> Option<Utility> {
        self.entries.get(board).copied()
    }

    #[must_use]
    pub fn contains(&self, board: &B) -> bool {
        self.entries.contains_key(board)
    }

    /// Stores a utility, replacing any previous entry
    pub fn store(&mut self, board: B, utility: Utility) {
        self.stats.stores += 1;
        self.entries.insert(board, utility);
    }

    /// Stores a utility only if the position has no entry yet
    pub fn store_if_absent(&mut self, board: B, utility: Utility) {
        if !self.entries.contains_key(&board) {
            self.store(board, utility);
        }
    }

    /// Drops every entry and resets the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_counts_hits_and_misses() {
        let mut cache: TranspositionCache<u32> = TranspositionCache::new();
        assert_eq!(cache.probe(&1), None);
        cache.store(1, 5);
        assert_eq!(cache.probe(&1), Some(5));

        let stats = cache.stats();
        assert_eq!(stats.lookups, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.stores, 1);
        assert!((stats.hit_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_if_absent_keeps_first_value() {
        let mut cache = TranspositionCache::new();
        cache.store_if_absent("a", 1);
        cache.store_if_absent("a", 2);
        assert_eq!(cache.peek(&"a"), Some(1));
        assert_eq!(cache.stats().stores, 1);
    }

    #[test]
    fn test_clear_resets_entries_and_counters() {
        let mut cache = TranspositionCache::new();
        cache.store(7u8, -3);
        let _ = cache.probe(&7);
        cache.clear();

        assert!(cache.is_empty());
        assert!(!cache.contains(&7));
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
