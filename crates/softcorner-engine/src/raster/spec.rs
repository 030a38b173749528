use crate::error::SpecError;
use crate::paint::Color;

/// The four reference colors a border is rasterized against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BorderColors {
    /// Element background (inside the outline).
    pub inner: Color,
    /// Page background behind the element.
    pub outer: Color,
    /// Border stroke color.
    pub border: Color,
    /// Shadow or glow color at the shadow center.
    pub shadow: Color,
}

impl BorderColors {
    #[inline]
    pub const fn new(inner: Color, outer: Color, border: Color, shadow: Color) -> Self {
        Self { inner, outer, border, shadow }
    }
}

/// Largest shadow radius a border may have. Rasters are `O(radius²)`.
pub const MAX_SHADOW_RADIUS: u32 = 2048;

/// Geometry and colors of one decorated border.
///
/// Invariants (checked by [`BorderSpec::new`]):
/// - `shadow_radius >= corner_radius`
/// - `border_width <= corner_radius`
/// - `corner_radius <= shadow_padding <= shadow_radius`
/// - `shadow_radius <= MAX_SHADOW_RADIUS`
///
/// The whole struct is the structural cache key for rasterized corners, so it
/// carries only plain values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BorderSpec {
    corner_radius: u32,
    shadow_radius: u32,
    shadow_padding: u32,
    shadow_offset: u32,
    border_width: u32,
    colors: BorderColors,
}

impl BorderSpec {
    pub fn new(
        corner_radius: u32,
        shadow_radius: u32,
        shadow_padding: u32,
        border_width: u32,
        colors: BorderColors,
    ) -> Result<Self, SpecError> {
        if shadow_radius > MAX_SHADOW_RADIUS {
            return Err(SpecError::RadiusTooLarge { radius: shadow_radius.into(), max: MAX_SHADOW_RADIUS });
        }
        if shadow_radius < corner_radius {
            return Err(SpecError::ShadowBelowCorner { corner: corner_radius, shadow: shadow_radius });
        }
        if border_width > corner_radius {
            return Err(SpecError::BorderWiderThanCorner { width: border_width, corner: corner_radius });
        }
        if shadow_padding < corner_radius || shadow_padding > shadow_radius {
            return Err(SpecError::PaddingOutOfRange {
                padding: shadow_padding,
                corner: corner_radius,
                shadow: shadow_radius,
            });
        }
        Ok(Self {
            corner_radius,
            shadow_radius,
            shadow_padding,
            shadow_offset: 0,
            border_width,
            colors,
        })
    }

    /// Moves the shadow center down by `offset` pixels (drop shadow).
    ///
    /// The offset never exceeds the shadow radius.
    #[inline]
    pub fn with_shadow_offset(mut self, offset: u32) -> Self {
        self.shadow_offset = offset.min(self.shadow_radius);
        self
    }

    #[inline]
    pub fn corner_radius(&self) -> u32 {
        self.corner_radius
    }

    #[inline]
    pub fn shadow_radius(&self) -> u32 {
        self.shadow_radius
    }

    #[inline]
    pub fn shadow_padding(&self) -> u32 {
        self.shadow_padding
    }

    #[inline]
    pub fn shadow_offset(&self) -> u32 {
        self.shadow_offset
    }

    #[inline]
    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    #[inline]
    pub fn colors(&self) -> &BorderColors {
        &self.colors
    }

    /// True when the outside of the shape fades from the shadow color
    /// instead of showing the plain outer color.
    #[inline]
    pub fn has_falloff(&self) -> bool {
        self.shadow_radius > self.corner_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> BorderColors {
        BorderColors::new(Color::WHITE, Color::WHITE, Color::BLACK, Color::BLACK)
    }

    #[test]
    fn accepts_plain_rounded_corner() {
        let spec = BorderSpec::new(8, 8, 8, 1, colors()).unwrap();
        assert!(!spec.has_falloff());
        assert_eq!(spec.shadow_offset(), 0);
    }

    #[test]
    fn rejects_shadow_below_corner() {
        assert_eq!(
            BorderSpec::new(8, 4, 8, 0, colors()),
            Err(SpecError::ShadowBelowCorner { corner: 8, shadow: 4 })
        );
    }

    #[test]
    fn rejects_border_wider_than_corner() {
        assert_eq!(
            BorderSpec::new(2, 4, 2, 3, colors()),
            Err(SpecError::BorderWiderThanCorner { width: 3, corner: 2 })
        );
    }

    #[test]
    fn rejects_padding_out_of_range() {
        assert!(BorderSpec::new(4, 10, 3, 0, colors()).is_err());
        assert!(BorderSpec::new(4, 10, 11, 0, colors()).is_err());
        assert!(BorderSpec::new(4, 10, 10, 0, colors()).is_ok());
    }

    #[test]
    fn rejects_oversized_radius() {
        assert!(BorderSpec::new(4, MAX_SHADOW_RADIUS, 4, 0, colors()).is_ok());
        assert_eq!(
            BorderSpec::new(4, u32::MAX, 4, 0, colors()),
            Err(SpecError::RadiusTooLarge { radius: u32::MAX.into(), max: MAX_SHADOW_RADIUS })
        );
    }

    #[test]
    fn offset_is_capped_at_shadow_radius() {
        let spec = BorderSpec::new(2, 6, 2, 0, colors()).unwrap().with_shadow_offset(u32::MAX);
        assert_eq!(spec.shadow_offset(), 6);
    }
}
