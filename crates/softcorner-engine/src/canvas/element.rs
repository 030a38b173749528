use crate::coords::{Insets, Rect};
use crate::decorate::ElementId;
use crate::paint::Color;

/// A rectangular element on a [`Canvas`](super::Canvas).
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasElement {
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,
    /// Border box in page pixels.
    pub rect: Rect,
    pub background: Color,
    pub border_width: u32,
    pub border_color: Color,
    pub padding: Insets,
    pub parent: Option<ElementId>,
}

impl CanvasElement {
    /// A transparent `div` without border or padding.
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            tag: "div".to_string(),
            classes: Vec::new(),
            rect,
            background: Color::transparent(),
            border_width: 0,
            border_color: Color::BLACK,
            padding: Insets::zero(),
            parent: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn border(mut self, width: u32, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }
}
