use crate::coords::{Insets, Size};
use crate::paint::Color;

/// What the host reports about an element before decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledStyle {
    /// The element's own background; often transparent.
    pub background: Color,
    /// Backgrounds of the ancestors, nearest first.
    pub ancestors: Vec<Color>,
    pub border_width: u32,
    pub border_color: Color,
    pub padding: Insets,
    pub size: Size,
}

impl SampledStyle {
    /// Background painted behind the element: the first non-transparent
    /// ancestor background, or white.
    pub fn outer_background(&self) -> Color {
        first_visible(self.ancestors.iter().copied())
    }

    /// Background inside the outline. A transparent element shows whatever
    /// its ancestors paint.
    pub fn inner_background(&self) -> Color {
        if self.background.is_transparent() {
            self.outer_background()
        } else {
            self.background
        }
    }
}

fn first_visible(chain: impl IntoIterator<Item = Color>) -> Color {
    chain
        .into_iter()
        .find(|c| !c.is_transparent())
        .unwrap_or(Color::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(background: Color, ancestors: Vec<Color>) -> SampledStyle {
        SampledStyle {
            background,
            ancestors,
            border_width: 0,
            border_color: Color::BLACK,
            padding: Insets::zero(),
            size: Size::new(10, 10),
        }
    }

    #[test]
    fn outer_skips_transparent_ancestors() {
        let s = style(Color::rgb(1, 1, 1), vec![Color::transparent(), Color::rgb(9, 9, 9)]);
        assert_eq!(s.outer_background(), Color::rgb(9, 9, 9));
        assert_eq!(s.inner_background(), Color::rgb(1, 1, 1));
    }

    #[test]
    fn transparent_element_inherits() {
        let s = style(Color::transparent(), vec![Color::rgb(9, 9, 9)]);
        assert_eq!(s.inner_background(), Color::rgb(9, 9, 9));
    }

    #[test]
    fn defaults_to_white() {
        let s = style(Color::transparent(), vec![Color::transparent()]);
        assert_eq!(s.outer_background(), Color::WHITE);
        assert_eq!(s.inner_background(), Color::WHITE);
    }
}
