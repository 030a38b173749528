//! Corner rasterization.
//!
//! Responsibilities:
//! - validate border geometry (`BorderSpec`)
//! - rasterize one corner quadrant per distinct spec (`corner`)
//! - memoize rasters so identically styled elements share work (`cache`)
//!
//! Rasterization is `O(shadow_radius²)` per corner; everything else in a
//! frame is derived from cached rasters by cloning and reflection.

mod cache;
mod corner;
mod grid;
mod spec;

pub use cache::{RasterCache, RasterKey};
pub use corner::{CornerRaster, RowCollapse, Vertical, rasterize_corner, side_profile};
pub use grid::{Cell, PixelGrid, Row};
pub use spec::{BorderColors, BorderSpec, MAX_SHADOW_RADIUS};

use crate::paint::Color;

/// Rasterizer configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RasterizerConfig {
    pub collapse: RowCollapse,
}

impl RasterizerConfig {
    /// Per-pixel rows, for callers that need exact pixel parity.
    pub fn exact() -> Self {
        Self { collapse: RowCollapse::Exact }
    }
}

/// Cached corner rasterizer.
///
/// Owns its cache; there is no process-wide state. Every returned grid is a
/// fresh clone, so callers may consume or rework it freely.
#[derive(Debug, Default)]
pub struct Rasterizer {
    config: RasterizerConfig,
    cache: RasterCache,
}

impl Rasterizer {
    pub fn new(config: RasterizerConfig) -> Self {
        Self { config, cache: RasterCache::new() }
    }

    #[inline]
    pub fn config(&self) -> RasterizerConfig {
        self.config
    }

    /// Rasterizes the top-left quadrant of the `vertical` strip.
    pub fn rasterize(&mut self, spec: &BorderSpec, vertical: Vertical) -> PixelGrid {
        self.corner(spec, vertical).grid
    }

    /// Corner grid plus its edge column.
    pub fn corner(&mut self, spec: &BorderSpec, vertical: Vertical) -> CornerRaster {
        let key = RasterKey { spec: *spec, vertical, collapse: self.config.collapse };
        let collapse = self.config.collapse;
        self.cache
            .get_or_insert_with(key, || {
                let raster = rasterize_corner(spec, vertical, collapse);
                log::trace!(
                    "rasterized {:?} corner {}x{} ({} cells)",
                    vertical,
                    raster.grid.width(),
                    raster.grid.height(),
                    raster.grid.cell_count()
                );
                raster
            })
            .clone()
    }

    /// Flat edge colors, one per row of the `vertical` strip.
    pub fn edge_column(&mut self, spec: &BorderSpec, vertical: Vertical) -> Vec<Color> {
        self.corner(spec, vertical).edge_column
    }

    /// Left side profile; reverse it for the right side.
    pub fn side_profile(&self, spec: &BorderSpec) -> Row {
        side_profile(spec, self.config.collapse)
    }

    #[inline]
    pub fn cache(&self) -> &RasterCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        log::debug!("clearing raster cache ({} entries)", self.cache.len());
        self.cache.clear();
    }
}
