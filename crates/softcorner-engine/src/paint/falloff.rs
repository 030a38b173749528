use super::Color;

/// Radial falloff from a shadow (or glow) color to the page background.
///
/// Semantics:
/// - at distance `0` the falloff yields `from`
/// - at `extent` and beyond it yields `to`
/// - in between, colors are blended linearly by `distance / extent` (pad spread)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Falloff {
    pub from: Color,
    pub to: Color,
    pub extent: u32,
}

impl Falloff {
    #[inline]
    pub const fn new(from: Color, to: Color, extent: u32) -> Self {
        Self { from, to, extent }
    }

    /// Returns true when sampling can only ever produce `to`.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.extent == 0 || self.from == self.to
    }

    /// Returns true when sampling at `distance` or anywhere farther yields `to`.
    #[inline]
    pub fn settled_at(&self, distance: f32) -> bool {
        self.is_flat() || distance >= self.extent as f32
    }

    /// Samples the falloff at `distance` from its center.
    pub fn sample(&self, distance: f32) -> Color {
        if self.extent == 0 {
            return self.to;
        }
        let extent = self.extent as f32;
        let t = distance.max(0.0).min(extent) / extent;
        self.from.blend(self.to, t)
    }
}
