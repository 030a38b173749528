use std::collections::HashMap;

use super::corner::{CornerRaster, RowCollapse, Vertical};
use super::spec::BorderSpec;

/// Structural cache key: every field that influences a rasterized corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RasterKey {
    pub spec: BorderSpec,
    pub vertical: Vertical,
    pub collapse: RowCollapse,
}

/// Memoized corner rasters.
///
/// Entries are created lazily and never evicted; the key space in practice is
/// a handful of visual styles. Entries are only ever cloned out, never handed
/// out mutably.
#[derive(Debug, Default)]
pub struct RasterCache {
    entries: HashMap<RasterKey, CornerRaster>,
    hits: u64,
    misses: u64,
}

impl RasterCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached raster for `key`, building it with `build` on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: RasterKey, build: F) -> &CornerRaster
    where
        F: FnOnce() -> CornerRaster,
    {
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.entries.entry(key).or_insert_with(build)
    }

    #[inline]
    pub fn get(&self, key: &RasterKey) -> Option<&CornerRaster> {
        self.entries.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since creation or the last [`clear`](Self::clear).
    #[inline]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
