use crate::paint::{Color, Falloff};

use super::grid::{Cell, PixelGrid, Row};
use super::spec::BorderSpec;

/// Which horizontal strip a corner belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Vertical {
    /// Corner curves downward into the element.
    Top,
    /// Corner curves upward; the grid is rasterized with row 0 as the
    /// outermost bottom row and must be flipped for placement.
    Bottom,
}

/// How rows are turned into cells.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum RowCollapse {
    /// Once two consecutive pixels are outside the outline and past the
    /// shadow falloff, the rest of the row becomes a single outer-colored
    /// cell. Renders identically to `Exact` with fewer cells.
    #[default]
    Collapse,
    /// One cell per pixel.
    Exact,
}

/// A rasterized corner plus the flat edge profile next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerRaster {
    pub grid: PixelGrid,
    /// One color per grid row, stretched across the strip between corners.
    pub edge_column: Vec<Color>,
}

impl CornerRaster {
    /// Vertical extent of the strip this corner belongs to.
    #[inline]
    pub fn extent(&self) -> u32 {
        self.grid.height()
    }
}

/// Rasterizes one corner quadrant and its edge column.
///
/// Pure function of its inputs; see [`Rasterizer`](super::Rasterizer) for the
/// cached entry point.
pub fn rasterize_corner(spec: &BorderSpec, vertical: Vertical, collapse: RowCollapse) -> CornerRaster {
    if spec.shadow_radius() == 0 {
        return CornerRaster { grid: PixelGrid::empty(), edge_column: Vec::new() };
    }

    let q = Quadrant::new(spec, vertical);
    let rows = (0..q.height).map(|y| q.scan_row(y as f32, collapse)).collect();
    let edge_column = (0..q.height).map(|y| q.shade(q.xc, y as f32).color).collect();

    CornerRaster { grid: PixelGrid::new(q.width, rows), edge_column }
}

/// Color profile of a left side, left to right, away from any corner.
///
/// Right sides use the reversed row.
pub fn side_profile(spec: &BorderSpec, collapse: RowCollapse) -> Row {
    if spec.shadow_radius() == 0 {
        return Row::default();
    }
    let q = Quadrant::new(spec, Vertical::Top);
    q.scan_row(q.yc.max(q.sy), collapse)
}

// ── geometry ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone)]
struct Shade {
    color: Color,
    /// Outside the outline with the falloff fully faded to the outer color.
    /// Every pixel farther out in the same row is settled too.
    settled: bool,
}

/// Quadrant frame: `x` grows right, `y` grows down, the element interior is
/// towards the bottom-right. Samples are taken at integer pixel coordinates.
#[derive(Debug, Clone)]
struct Quadrant {
    width: u32,
    height: u32,
    /// Circle center.
    xc: f32,
    yc: f32,
    /// Shadow center.
    sx: f32,
    sy: f32,
    radius: f32,
    border_width: f32,
    inner: Color,
    border: Color,
    outer: Color,
    falloff: Option<Falloff>,
}

impl Quadrant {
    fn new(spec: &BorderSpec, vertical: Vertical) -> Self {
        let srad = spec.shadow_radius();
        let crad = spec.corner_radius();
        let offset = spec.shadow_offset();
        let colors = spec.colors();

        // Outline sits `shadow_padding` pixels in from the inner grid edge.
        let x0 = srad - spec.shadow_padding();
        let xc = x0 + crad;
        let (height, yc, sy) = match vertical {
            Vertical::Top => {
                let yc = x0 + crad;
                (srad, yc, yc + offset)
            }
            Vertical::Bottom => {
                let yc = x0 + offset + crad;
                (srad + offset, yc, yc - offset)
            }
        };

        let falloff = spec
            .has_falloff()
            .then(|| Falloff::new(colors.shadow, colors.outer, srad));

        Self {
            width: srad,
            height,
            xc: xc as f32,
            yc: yc as f32,
            sx: xc as f32,
            sy: sy as f32,
            radius: crad as f32,
            border_width: spec.border_width() as f32,
            inner: colors.inner,
            border: colors.border,
            outer: colors.outer,
            falloff,
        }
    }

    /// Signed distance from `(x, y)` to the rounded outline; negative inside.
    fn outline_distance(&self, x: f32, y: f32) -> f32 {
        rounded_distance(self.xc - x, self.yc - y, self.radius)
    }

    /// Shadow color at `(x, y)` and whether the falloff has reached `outer`.
    fn outside(&self, x: f32, y: f32) -> (Color, bool) {
        match &self.falloff {
            Some(f) => {
                let d = rounded_distance(self.sx - x, self.sy - y, 0.0).max(0.0);
                (f.sample(d), f.settled_at(d))
            }
            None => (self.outer, true),
        }
    }

    fn shade(&self, x: f32, y: f32) -> Shade {
        let cd = self.outline_distance(x, y);

        if cd >= 1.0 {
            let (color, faded) = self.outside(x, y);
            return Shade { color, settled: faded };
        }

        let color = if cd >= 0.0 {
            let edge = if self.border_width > 0.0 { self.border } else { self.inner };
            edge.blend(self.outside(x, y).0, cd)
        } else if self.border_width <= 0.0 {
            self.inner
        } else {
            let into_border = cd + self.border_width;
            if into_border < 0.0 {
                self.inner
            } else if into_border < 1.0 {
                self.inner.blend(self.border, into_border)
            } else {
                self.border
            }
        };
        Shade { color, settled: false }
    }

    /// Scans row `y` from the inner column outward and returns its cells
    /// left to right.
    fn scan_row(&self, y: f32, collapse: RowCollapse) -> Row {
        let mut cells = Vec::with_capacity(self.width as usize);
        let mut settled = 0u32;

        for x in (0..self.width).rev() {
            let shade = self.shade(x as f32, y);
            if shade.settled {
                settled += 1;
            } else {
                settled = 0;
            }

            if collapse == RowCollapse::Collapse && settled > 1 {
                cells.push(Cell::new(x + 1, self.outer));
                break;
            }
            cells.push(Cell::new(1, shade.color));
        }

        cells.reverse();
        Row::new(cells)
    }
}

/// Signed distance to a rounded box corner at `(dx, dy)` from its circle center.
///
/// Inside the quarter-circle band this is the distance to the arc; elsewhere
/// the distance to the nearer straight edge.
#[inline]
fn rounded_distance(dx: f32, dy: f32, radius: f32) -> f32 {
    if dx > 0.0 && dy > 0.0 {
        dx.hypot(dy) - radius
    } else {
        dx.max(dy) - radius
    }
}
