use crate::coords::EdgeSet;
use crate::error::SpecError;
use crate::paint::Color;
use crate::raster::{BorderColors, BorderSpec, MAX_SHADOW_RADIUS};

use super::SampledStyle;

/// Visual family of a border.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// Rounded corners, no shadow.
    Simple,
    /// Drop shadow falling below the element.
    Shadow { width: u32, color: Color },
    /// Border color bleeding out across the whole corner radius.
    Fade,
    /// Even glow on every side.
    Glow { width: u32, color: Color },
}

impl BorderStyle {
    /// Keyword used in descriptors.
    pub fn keyword(&self) -> &'static str {
        match self {
            BorderStyle::Simple => "simple",
            BorderStyle::Shadow { .. } => "shadow",
            BorderStyle::Fade => "fade",
            BorderStyle::Glow { .. } => "glow",
        }
    }
}

/// Everything a caller declares about one decorated element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Decoration {
    pub corner_radius: u32,
    pub style: BorderStyle,
    pub edges: EdgeSet,
    /// Fixed outer height; `None` keeps the element's own height.
    pub height: Option<u32>,
}

impl Decoration {
    pub fn new(corner_radius: u32, style: BorderStyle) -> Self {
        Self { corner_radius, style, edges: EdgeSet::all(), height: None }
    }

    pub fn with_edges(mut self, edges: EdgeSet) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Combines the declaration with the element's sampled look.
    ///
    /// | style  | corner | shadow radius | shadow padding | shadow color | offset |
    /// |--------|--------|---------------|----------------|--------------|--------|
    /// | simple | r      | r             | r              | outer        | 0      |
    /// | shadow | r      | r + 2w        | r + w          | color        | w/2 rounded up |
    /// | fade   | 1      | max(r, 1)     | 1              | border color | 0      |
    /// | glow   | r      | r + w         | r              | color        | 0      |
    ///
    /// The border width is clamped to the resulting corner radius. Radii past
    /// [`MAX_SHADOW_RADIUS`] are rejected.
    pub fn resolve(&self, sampled: &SampledStyle) -> Result<BorderSpec, SpecError> {
        let r = u64::from(self.corner_radius);
        let inner = sampled.inner_background();
        let outer = sampled.outer_background();

        let (crad, srad, spad, shadow, offset) = match self.style {
            BorderStyle::Simple => (r, r, r, outer, 0),
            BorderStyle::Shadow { width, color } => {
                let w = u64::from(width);
                (r, r + 2 * w, r + w, color, width / 2 + width % 2)
            }
            BorderStyle::Fade => (1, r.max(1), 1, sampled.border_color, 0),
            BorderStyle::Glow { width, color } => (r, r + u64::from(width), r, color, 0),
        };
        let crad = narrow(crad)?;
        let srad = narrow(srad)?;
        let spad = narrow(spad)?;

        let mut border_width = sampled.border_width;
        if border_width > crad {
            log::warn!("border width {} exceeds corner radius {}; clamping", border_width, crad);
            border_width = crad;
        }

        let colors = BorderColors::new(inner, outer, sampled.border_color, shadow);
        Ok(BorderSpec::new(crad, srad, spad, border_width, colors)?.with_shadow_offset(offset))
    }
}

fn narrow(radius: u64) -> Result<u32, SpecError> {
    u32::try_from(radius)
        .ok()
        .filter(|&r| r <= MAX_SHADOW_RADIUS)
        .ok_or(SpecError::RadiusTooLarge { radius, max: MAX_SHADOW_RADIUS })
}
