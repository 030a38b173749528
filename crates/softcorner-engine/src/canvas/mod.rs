//! In-memory [`Host`]: rectangular elements over a flat RGBA page.
//!
//! Useful for previews and tests. Elements are painted in insertion order;
//! decorated elements get their frame painted inside their rectangle.

mod element;
mod selector;

pub use element::CanvasElement;

use crate::coords::{Edge, Insets, Rect, Size};
use crate::decorate::{ElementId, Host, Mutation};
use crate::frame::Strip;
use crate::paint::Color;
use crate::raster::Row;
use crate::style::SampledStyle;

use selector::Selector;

/// Frame parts committed to one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Applied {
    wrapped: bool,
    padding: Option<Insets>,
    content_height: Option<u32>,
    top: Option<Strip>,
    bottom: Option<Strip>,
    left: Option<Row>,
    right: Option<Row>,
}

impl Applied {
    fn insets(&self) -> Insets {
        Insets {
            top: self.top.as_ref().map_or(0, Strip::height),
            right: self.right.as_ref().map_or(0, Row::width),
            bottom: self.bottom.as_ref().map_or(0, Strip::height),
            left: self.left.as_ref().map_or(0, Row::width),
        }
    }
}

/// A page of elements that can be decorated and rendered to pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    background: Color,
    elements: Vec<CanvasElement>,
    applied: Vec<Applied>,
    alerts: Vec<String>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            size: Size::new(width, height),
            background,
            elements: Vec::new(),
            applied: Vec::new(),
            alerts: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Adds a top-level element.
    pub fn add(&mut self, element: CanvasElement) -> ElementId {
        self.elements.push(element);
        self.applied.push(Applied::default());
        ElementId(self.elements.len() - 1)
    }

    /// Adds an element nested in `parent`; its outer background is sampled
    /// from the parent chain.
    pub fn add_child(&mut self, parent: ElementId, mut element: CanvasElement) -> ElementId {
        element.parent = Some(parent);
        self.add(element)
    }

    #[inline]
    pub fn element(&self, id: ElementId) -> Option<&CanvasElement> {
        self.elements.get(id.0)
    }

    /// Messages passed to [`Host::alert`], oldest first.
    #[inline]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// True once a frame has been committed to `id`.
    pub fn is_decorated(&self, id: ElementId) -> bool {
        self.applied.get(id.0).is_some_and(|a| a.wrapped)
    }

    /// Padding of the content box after decoration.
    pub fn content_padding(&self, id: ElementId) -> Option<Insets> {
        let el = self.elements.get(id.0)?;
        Some(self.applied[id.0].padding.unwrap_or(el.padding))
    }

    /// Outer rectangle of `id` as laid out after decoration.
    pub fn layout_rect(&self, id: ElementId) -> Option<Rect> {
        let el = self.elements.get(id.0)?;
        let applied = &self.applied[id.0];
        let mut rect = el.rect;
        if let Some(h) = applied.content_height {
            rect.height = h + applied.insets().vertical();
        }
        Some(rect)
    }

    /// Renders the page to `width * height` pixels, row-major.
    pub fn render(&self) -> Vec<Color> {
        let mut px = vec![self.background; (self.size.width * self.size.height) as usize];
        for (i, el) in self.elements.iter().enumerate() {
            let applied = &self.applied[i];
            let Some(rect) = self.layout_rect(ElementId(i)) else {
                continue;
            };
            if applied.wrapped {
                self.paint_frame(&mut px, rect, el, applied);
            } else {
                self.fill(&mut px, rect, el.background);
            }
        }
        px
    }

    /// Row-major RGBA bytes, ready for an image encoder.
    pub fn render_rgba8(&self) -> Vec<u8> {
        self.render().into_iter().flat_map(Color::to_array).collect()
    }

    // ── painting ──────────────────────────────────────────────────────────

    fn paint_frame(&self, px: &mut [Color], rect: Rect, el: &CanvasElement, applied: &Applied) {
        let insets = applied.insets();
        self.fill(px, rect.deflate(insets), el.background);

        if let Some(top) = &applied.top {
            for y in 0..top.height().min(rect.height) {
                self.blit(px, rect.x, rect.y + y, &top.row_pixels(y, rect.width));
            }
        }
        if let Some(bottom) = &applied.bottom {
            let h = bottom.height().min(rect.height);
            let y0 = rect.bottom() - h;
            for y in 0..h {
                let row = bottom.height() - h + y;
                self.blit(px, rect.x, y0 + y, &bottom.row_pixels(row, rect.width));
            }
        }

        let y_start = rect.y + insets.top;
        let y_end = rect.bottom().saturating_sub(insets.bottom).max(y_start);
        if let Some(left) = &applied.left {
            let colors: Vec<Color> = left.pixels().collect();
            for y in y_start..y_end {
                self.blit(px, rect.x, y, &colors);
            }
        }
        if let Some(right) = &applied.right {
            let colors: Vec<Color> = right.pixels().collect();
            let x = rect.right().saturating_sub(right.width()).max(rect.x);
            for y in y_start..y_end {
                self.blit(px, x, y, &colors);
            }
        }
    }

    fn fill(&self, px: &mut [Color], rect: Rect, color: Color) {
        let Some(r) = rect.intersect(Rect::new(0, 0, self.size.width, self.size.height)) else {
            return;
        };
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                let i = (y * self.size.width + x) as usize;
                px[i] = color.over(px[i]);
            }
        }
    }

    fn blit(&self, px: &mut [Color], x: u32, y: u32, colors: &[Color]) {
        if y >= self.size.height {
            return;
        }
        for (dx, &c) in colors.iter().enumerate() {
            let xx = x + dx as u32;
            if xx >= self.size.width {
                break;
            }
            let i = (y * self.size.width + xx) as usize;
            px[i] = c.over(px[i]);
        }
    }

    fn ancestors(&self, id: ElementId) -> Vec<Color> {
        let mut chain = Vec::new();
        let mut cur = self.elements.get(id.0).and_then(|e| e.parent);
        while let Some(p) = cur {
            let Some(el) = self.elements.get(p.0) else { break };
            chain.push(el.background);
            cur = el.parent;
        }
        chain.push(self.background);
        chain
    }
}

impl Host for Canvas {
    fn select(&self, selector: &str) -> Vec<ElementId> {
        let sel = Selector::parse(selector);
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| sel.matches(el))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn sample(&self, element: ElementId) -> SampledStyle {
        let ancestors = self.ancestors(element);
        match self.elements.get(element.0) {
            Some(el) => SampledStyle {
                background: el.background,
                ancestors,
                border_width: el.border_width,
                border_color: el.border_color,
                padding: el.padding,
                size: el.rect.size(),
            },
            None => SampledStyle {
                background: Color::transparent(),
                ancestors,
                border_width: 0,
                border_color: Color::BLACK,
                padding: Insets::zero(),
                size: Size::default(),
            },
        }
    }

    fn alert(&mut self, message: &str) {
        log::error!("{}", message);
        self.alerts.push(message.to_string());
    }

    fn apply(&mut self, mutation: Mutation) {
        let Some(applied) = self.applied.get_mut(mutation.element().0) else {
            log::warn!("mutation for unknown element {:?}", mutation.element());
            return;
        };
        match mutation {
            Mutation::WrapContent { .. } => applied.wrapped = true,
            Mutation::SetPadding { padding, .. } => applied.padding = Some(padding),
            Mutation::SetHeight { height, .. } => applied.content_height = Some(height),
            Mutation::InsertStrip { edge: Edge::Top, strip, .. } => applied.top = Some(strip),
            Mutation::InsertStrip { edge: Edge::Bottom, strip, .. } => applied.bottom = Some(strip),
            Mutation::InsertStrip { edge, .. } => {
                log::warn!("ignoring strip for {:?} edge", edge);
            }
            Mutation::FrameSides { left, right, .. } => {
                applied.left = left;
                applied.right = right;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::{Decorator, Rule};
    use crate::style::Descriptor;

    const PAGE: Color = Color::rgb(255, 255, 255);
    const CARD: Color = Color::rgb(40, 60, 200);

    fn page() -> (Canvas, ElementId) {
        let mut c = Canvas::new(60, 40, PAGE);
        let id = c.add(
            CanvasElement::new("card", Rect::new(10, 5, 40, 30))
                .background(CARD)
                .padding(Insets::all(10)),
        );
        (c, id)
    }

    fn at(px: &[Color], c: &Canvas, x: u32, y: u32) -> Color {
        px[(y * c.size().width + x) as usize]
    }

    #[test]
    fn undecorated_fills_its_rect() {
        let (c, _) = page();
        let px = c.render();
        assert_eq!(at(&px, &c, 0, 0), PAGE);
        assert_eq!(at(&px, &c, 10, 5), CARD);
        assert_eq!(at(&px, &c, 49, 34), CARD);
        assert_eq!(at(&px, &c, 50, 35), PAGE);
    }

    #[test]
    fn rounded_corners_show_the_page() {
        let (mut c, id) = page();
        let rule = Rule::new("#card", Descriptor::new().set("borderType", "simple").set("cornerRadius", "8"));
        Decorator::default().decorate(&mut c, &[rule]);

        assert!(c.is_decorated(id));
        assert_eq!(c.content_padding(id), Some(Insets::all(2)));
        let px = c.render();
        // Extreme corners are cut away, centres of edges are solid.
        assert_eq!(at(&px, &c, 10, 5), PAGE);
        assert_eq!(at(&px, &c, 49, 5), PAGE);
        assert_eq!(at(&px, &c, 10, 34), PAGE);
        assert_eq!(at(&px, &c, 49, 34), PAGE);
        assert_eq!(at(&px, &c, 30, 5), CARD);
        assert_eq!(at(&px, &c, 10, 20), CARD);
        assert_eq!(at(&px, &c, 30, 20), CARD);
    }

    #[test]
    fn nested_elements_sample_parent_background() {
        let mut c = Canvas::new(20, 20, PAGE);
        let outer = c.add(CanvasElement::new("outer", Rect::new(0, 0, 20, 20)).background(CARD));
        let inner = c.add_child(outer, CanvasElement::new("inner", Rect::new(2, 2, 10, 10)));
        let s = c.sample(inner);
        assert_eq!(s.outer_background(), CARD);
        assert_eq!(s.inner_background(), CARD);
        assert_eq!(s.ancestors, vec![CARD, PAGE]);
    }

    #[test]
    fn alerts_are_recorded() {
        let (mut c, id) = page();
        let rule = Rule::new(".x, #card", Descriptor::new().set("borderType", "neon"));
        Decorator::default().decorate(&mut c, &[rule]);
        assert_eq!(c.alerts().len(), 1);
        assert!(!c.is_decorated(id));
    }

    #[test]
    fn fixed_height_resizes_layout() {
        let (mut c, id) = page();
        let rule = Rule::new(
            "#card",
            Descriptor::new().set("borderType", "simple").set("cornerRadius", "4").set("height", "20"),
        );
        Decorator::default().decorate(&mut c, &[rule]);
        assert_eq!(c.layout_rect(id), Some(Rect::new(10, 5, 40, 20)));
    }

    #[test]
    fn rgba8_has_four_bytes_per_pixel() {
        let (c, _) = page();
        let bytes = c.render_rgba8();
        assert_eq!(bytes.len(), 60 * 40 * 4);
        assert_eq!(&bytes[..4], &[255, 255, 255, 255]);
    }
}
