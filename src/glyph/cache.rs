//! Bounded glyph cache with FIFO eviction.
//!
//! Eviction follows insertion order, not access order: a glyph that is hit
//! on every line is still dropped once it becomes the oldest entry.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tracing::debug;

use super::{FontSizeProfile, GlyphBitmap};

/// Default number of cached glyphs.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Cache key. Profiles with identical dimensions share entries.
pub type GlyphKey = (char, FontSizeProfile);

/// Counters exposed for instrumentation and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// FIFO-bounded map from (char, profile) to rendered glyph.
#[derive(Debug)]
pub struct GlyphCache {
    capacity: usize,
    entries: HashMap<GlyphKey, Arc<GlyphBitmap>>,
    order: VecDeque<GlyphKey>,
    stats: CacheStats,
}

impl GlyphCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
            stats: CacheStats::default(),
        }
    }

    /// Look up a glyph, counting the hit or miss.
    pub fn get(&mut self, key: &GlyphKey) -> Option<Arc<GlyphBitmap>> {
        match self.entries.get(key) {
            Some(bitmap) => {
                self.stats.hits += 1;
                Some(Arc::clone(bitmap))
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Whether a key is cached, without touching the counters.
    pub fn contains(&self, key: &GlyphKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a glyph, evicting the oldest entry when full.
    ///
    /// If the key is already present (another caller rendered it first) the
    /// existing entry wins and is returned.
    pub fn insert(&mut self, key: GlyphKey, bitmap: Arc<GlyphBitmap>) -> Arc<GlyphBitmap> {
        if let Some(existing) = self.entries.get(&key) {
            return Arc::clone(existing);
        }

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.stats.evictions += 1;
            debug!(ch = ?oldest.0, "evicted glyph from cache");
        }

        self.order.push_back(key);
        self.entries.insert(key, Arc::clone(&bitmap));
        bitmap
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
