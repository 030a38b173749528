/// Straight-alpha RGBA color with 8-bit channels.
///
/// Border rasterization samples colors from the host (computed styles), which
/// are always 8-bit sRGB, so no float or premultiplied representation is kept.
/// `Hash` + `Eq` allow colors to take part in raster cache keys.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Per-channel linear interpolation from `self` (at `w = 0`) to `other` (at `w = 1`).
    ///
    /// `w` is clamped to `[0, 1]`; each channel is rounded half away from zero,
    /// so `blend(black, white, 0.5)` is `128`.
    pub fn blend(self, other: Color, w: f32) -> Color {
        let w = if w.is_nan() { 0.0 } else { w.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let a = a as f32;
            let v = a + (b as f32 - a) * w;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Source-over composition of `self` onto an opaque-or-not `dst`.
    ///
    /// Used by the canvas when materializing translucent strips.
    pub fn over(self, dst: Color) -> Color {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }
        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Color::transparent();
        }
        let ch = |s: u8, d: u8| -> u8 {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: ch(self.r, dst.r),
            g: ch(self.g, dst.g),
            b: ch(self.b, dst.b),
            a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        Color::from_array(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::rgb(0, 0, 0);
    const WHITE: Color = Color::rgb(255, 255, 255);

    // ── blend ─────────────────────────────────────────────────────────────

    #[test]
    fn blend_half_rounds_up() {
        assert_eq!(BLACK.blend(WHITE, 0.5), Color::rgba(128, 128, 128, 255));
    }

    #[test]
    fn blend_extremes_are_endpoints() {
        let samples = [
            Color::rgba(12, 200, 7, 0),
            Color::rgba(255, 0, 128, 90),
            Color::rgb(1, 2, 3),
            WHITE,
        ];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(a.blend(b, 0.0), a);
                assert_eq!(a.blend(b, 1.0), b);
            }
        }
    }

    #[test]
    fn blend_clamps_weight() {
        assert_eq!(BLACK.blend(WHITE, -3.0), BLACK);
        assert_eq!(BLACK.blend(WHITE, 7.5), WHITE);
        assert_eq!(BLACK.blend(WHITE, f32::NAN), BLACK);
    }

    #[test]
    fn blend_is_monotonic_per_channel() {
        let a = Color::rgba(250, 10, 100, 0);
        let b = Color::rgba(5, 240, 100, 255);
        let mut prev = a;
        for step in 1..=64 {
            let c = a.blend(b, step as f32 / 64.0);
            assert!(c.r <= prev.r);
            assert!(c.g >= prev.g);
            assert_eq!(c.b, 100);
            assert!(c.a >= prev.a);
            prev = c;
        }
    }

    // ── over ──────────────────────────────────────────────────────────────

    #[test]
    fn over_opaque_replaces() {
        assert_eq!(WHITE.over(BLACK), WHITE);
    }

    #[test]
    fn over_transparent_keeps_destination() {
        assert_eq!(Color::transparent().over(WHITE), WHITE);
    }

    #[test]
    fn over_half_alpha_on_opaque() {
        let c = Color::rgba(0, 0, 0, 128).over(WHITE);
        assert_eq!(c.a, 255);
        assert!(c.r > 120 && c.r < 130);
    }
}
