use crate::paint::Color;

/// A horizontal run of identically colored pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub width: u32,
    pub color: Color,
}

impl Cell {
    #[inline]
    pub const fn new(width: u32, color: Color) -> Self {
        Self { width, color }
    }
}

/// One row of a rasterized strip, as cells ordered left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    #[inline]
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total width in pixels.
    pub fn width(&self) -> u32 {
        self.cells.iter().map(|c| c.width).sum()
    }

    /// Color of the pixel at column `x`, or `None` past the end of the row.
    pub fn color_at(&self, x: u32) -> Option<Color> {
        let mut start = 0;
        for cell in &self.cells {
            if x < start + cell.width {
                return Some(cell.color);
            }
            start += cell.width;
        }
        None
    }

    /// Expands cells into one color per pixel.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells
            .iter()
            .flat_map(|c| std::iter::repeat(c.color).take(c.width as usize))
    }

    /// Mirror image (right to left).
    pub fn reversed(&self) -> Row {
        Row { cells: self.cells.iter().rev().copied().collect() }
    }

    #[inline]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

/// Rasterized corner quadrant.
///
/// By convention a freshly rasterized grid is the top-left quadrant; the
/// other three corners are produced with [`flip_horizontal`](Self::flip_horizontal)
/// and [`flip_vertical`](Self::flip_vertical). Grids are never mutated in place:
/// flips return new grids, and clones share nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: u32,
    rows: Vec<Row>,
}

impl PixelGrid {
    pub fn new(width: u32, rows: Vec<Row>) -> Self {
        debug_assert!(
            rows.iter().all(|r| r.width() == width),
            "PixelGrid::new: every row must be {} pixels wide",
            width
        );
        Self { width, rows }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Vertical extent in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, y: u32) -> Option<&Row> {
        self.rows.get(y as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.row(y)?.color_at(x)
    }

    /// Number of cells across all rows; what a host has to materialize.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Top-left → top-right.
    pub fn flip_horizontal(&self) -> PixelGrid {
        PixelGrid {
            width: self.width,
            rows: self.rows.iter().map(Row::reversed).collect(),
        }
    }

    /// Top → bottom.
    pub fn flip_vertical(&self) -> PixelGrid {
        PixelGrid {
            width: self.width,
            rows: self.rows.iter().rev().cloned().collect(),
        }
    }

    #[inline]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::rgb(10, 0, 0);
    const B: Color = Color::rgb(0, 20, 0);
    const C: Color = Color::rgb(0, 0, 30);

    fn grid() -> PixelGrid {
        PixelGrid::new(
            4,
            vec![
                Row::new(vec![Cell::new(3, A), Cell::new(1, B)]),
                Row::new(vec![Cell::new(1, C), Cell::new(1, B), Cell::new(2, A)]),
            ],
        )
    }

    #[test]
    fn pixel_lookup_walks_cells() {
        let g = grid();
        assert_eq!(g.pixel(0, 0), Some(A));
        assert_eq!(g.pixel(2, 0), Some(A));
        assert_eq!(g.pixel(3, 0), Some(B));
        assert_eq!(g.pixel(1, 1), Some(B));
        assert_eq!(g.pixel(4, 0), None);
        assert_eq!(g.pixel(0, 2), None);
    }

    #[test]
    fn flips() {
        let g = grid();
        let h = g.flip_horizontal();
        assert_eq!(h.pixel(0, 0), Some(B));
        assert_eq!(h.pixel(3, 1), Some(C));
        let v = g.flip_vertical();
        assert_eq!(v.pixel(0, 0), Some(C));
        assert_eq!(v.pixel(0, 1), Some(A));
        assert_eq!(h.flip_horizontal(), g);
    }

    #[test]
    fn pixels_expand_runs() {
        let row = Row::new(vec![Cell::new(2, A), Cell::new(1, C)]);
        assert_eq!(row.pixels().collect::<Vec<_>>(), vec![A, A, C]);
        assert_eq!(row.width(), 3);
    }

    #[test]
    fn counts() {
        let g = grid();
        assert_eq!(g.height(), 2);
        assert_eq!(g.cell_count(), 5);
        assert!(!g.is_empty());
        assert!(PixelGrid::empty().is_empty());
    }
}
