/// Per-side pixel distances (padding, frame thickness).
///
/// Sides follow CSS order: top, right, bottom, left.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    #[inline]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same distance on all four sides.
    #[inline]
    pub const fn all(v: u32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    #[inline]
    pub const fn horizontal(self) -> u32 {
        self.left + self.right
    }

    #[inline]
    pub const fn vertical(self) -> u32 {
        self.top + self.bottom
    }

    /// Side-wise subtraction, saturating at zero.
    #[inline]
    pub fn saturating_sub(self, other: Insets) -> Insets {
        Insets {
            top: self.top.saturating_sub(other.top),
            right: self.right.saturating_sub(other.right),
            bottom: self.bottom.saturating_sub(other.bottom),
            left: self.left.saturating_sub(other.left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_sub_clamps_each_side() {
        let padding = Insets::new(10, 2, 0, 5);
        let frame = Insets::new(4, 4, 4, 4);
        assert_eq!(padding.saturating_sub(frame), Insets::new(6, 0, 0, 1));
    }

    #[test]
    fn sums() {
        let i = Insets::new(1, 2, 3, 4);
        assert_eq!(i.horizontal(), 6);
        assert_eq!(i.vertical(), 4);
    }
}
