use crate::coords::{Edge, EdgeSet, Insets};
use crate::raster::{BorderSpec, Rasterizer, Row, Vertical};

use super::Strip;

/// Every piece a host needs to draw one decorated border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderFrame {
    pub top: Option<Strip>,
    pub bottom: Option<Strip>,
    /// Left side profile, left to right; repeated for every row between the strips.
    pub left: Option<Row>,
    /// Right side profile, left to right.
    pub right: Option<Row>,
    /// Pixels the frame occupies on each side.
    pub insets: Insets,
}

impl BorderFrame {
    /// Builds the frame for `spec`, skipping every side not in `edges`.
    ///
    /// Corners are shared between a strip and a side: a corner is drawn only
    /// when both of its sides are present.
    pub fn build(rasterizer: &mut Rasterizer, spec: &BorderSpec, edges: EdgeSet) -> BorderFrame {
        let has_left = edges.contains(Edge::Left);
        let has_right = edges.contains(Edge::Right);

        let mut strip = |vertical: Vertical| -> Strip {
            let raster = rasterizer.corner(spec, vertical);
            let (grid, fill) = match vertical {
                Vertical::Top => (raster.grid, raster.edge_column),
                Vertical::Bottom => {
                    let mut fill = raster.edge_column;
                    fill.reverse();
                    (raster.grid.flip_vertical(), fill)
                }
            };
            Strip {
                left: has_left.then(|| grid.clone()),
                right: has_right.then(|| grid.flip_horizontal()),
                fill,
            }
        };

        let top = edges.contains(Edge::Top).then(|| strip(Vertical::Top));
        let bottom = edges.contains(Edge::Bottom).then(|| strip(Vertical::Bottom));

        let side = rasterizer.side_profile(spec);
        let side_width = side.width();
        let left = has_left.then(|| side.clone());
        let right = has_right.then(|| side.reversed());

        let insets = Insets {
            top: top.as_ref().map_or(0, Strip::height),
            right: if has_right { side_width } else { 0 },
            bottom: bottom.as_ref().map_or(0, Strip::height),
            left: if has_left { side_width } else { 0 },
        };

        BorderFrame { top, bottom, left, right, insets }
    }

    /// True when no side was requested.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Padding left for the content once the frame has taken its share.
#[inline]
pub fn adjust_padding(padding: Insets, frame: Insets) -> Insets {
    padding.saturating_sub(frame)
}
