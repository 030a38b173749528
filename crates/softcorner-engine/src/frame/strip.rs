use crate::paint::Color;
use crate::raster::PixelGrid;

/// A horizontal top or bottom band: two corners and the flat run between them.
///
/// Rows are ordered top to bottom as they will appear on screen. A missing
/// corner means the adjoining side has no border; the fill then runs to the
/// element edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub left: Option<PixelGrid>,
    /// One color per row, stretched across the width between the corners.
    pub fill: Vec<Color>,
    pub right: Option<PixelGrid>,
}

impl Strip {
    #[inline]
    pub fn height(&self) -> u32 {
        self.fill.len() as u32
    }

    /// Width taken by the corners; the fill gets whatever is left.
    pub fn corner_width(&self) -> u32 {
        self.left.as_ref().map_or(0, PixelGrid::width) + self.right.as_ref().map_or(0, PixelGrid::width)
    }

    /// Expands row `y` to exactly `width` pixels, left to right.
    ///
    /// When the element is narrower than both corners, each corner keeps its
    /// outer half and the fill disappears.
    pub fn row_pixels(&self, y: u32, width: u32) -> Vec<Color> {
        let Some(&fill) = self.fill.get(y as usize) else {
            return Vec::new();
        };

        let left: Vec<Color> = corner_row(self.left.as_ref(), y);
        let right: Vec<Color> = corner_row(self.right.as_ref(), y);

        let mut out = Vec::with_capacity(width as usize);
        let corners = (left.len() + right.len()) as u32;
        if corners <= width {
            out.extend_from_slice(&left);
            out.extend(std::iter::repeat(fill).take((width - corners) as usize));
            out.extend_from_slice(&right);
        } else {
            let keep_left = (width as usize * left.len()).div_ceil(left.len() + right.len());
            let keep_right = width as usize - keep_left;
            out.extend_from_slice(&left[..keep_left.min(left.len())]);
            out.extend_from_slice(&right[right.len() - keep_right.min(right.len())..]);
        }
        out
    }
}

fn corner_row(grid: Option<&PixelGrid>, y: u32) -> Vec<Color> {
    grid.and_then(|g| g.row(y))
        .map(|row| row.pixels().collect())
        .unwrap_or_default()
}
