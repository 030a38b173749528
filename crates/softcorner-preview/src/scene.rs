use std::collections::HashMap;

use anyhow::{Result, bail};
use softcorner_engine::canvas::{Canvas, CanvasElement};
use softcorner_engine::coords::{Insets, Rect};
use softcorner_engine::decorate::ElementId;
use softcorner_engine::paint::Color;
use softcorner_rules::{Block, RuleDocument, Value};

const DEFAULT_PAGE: (u32, u32) = (320, 240);

/// Builds a [`Canvas`] from a scene document.
///
/// ```text
/// page { width: 200 height: 120 background: #f0f0f0 }
/// element "card" { x: 20 y: 20 width: 160 height: 80 background: #ffffff class: "card" }
/// element "badge" { parent: "card" x: 30 y: 30 width: 20 height: 20 }
/// ```
///
/// A `parent` must be declared before its children.
pub fn build_canvas(doc: &RuleDocument) -> Result<Canvas> {
    let mut canvas = match doc.blocks_of("page").last() {
        Some(page) => Canvas::new(
            px(page, "width")?.unwrap_or(DEFAULT_PAGE.0),
            px(page, "height")?.unwrap_or(DEFAULT_PAGE.1),
            color(page, "background", Color::WHITE),
        ),
        None => Canvas::new(DEFAULT_PAGE.0, DEFAULT_PAGE.1, Color::WHITE),
    };

    let mut ids: HashMap<String, ElementId> = HashMap::new();
    for block in doc.blocks_of("element") {
        let Some(name) = &block.target else {
            bail!("element block on line {} has no id", block.line);
        };
        let element = element(block, name)?;
        let id = match block.prop_str("parent") {
            Some(parent) => match ids.get(parent) {
                Some(&p) => canvas.add_child(p, element),
                None => bail!("element {:?} on line {}: unknown parent {:?}", name, block.line, parent),
            },
            None => canvas.add(element),
        };
        if ids.insert(name.clone(), id).is_some() {
            log::warn!("element id {:?} declared twice; later block shadows earlier", name);
        }
    }

    for block in doc.blocks.iter().filter(|b| b.kind != "page" && b.kind != "element") {
        log::warn!("ignoring {} block on line {} in scene file", block.kind, block.line);
    }
    Ok(canvas)
}

fn element(block: &Block, name: &str) -> Result<CanvasElement> {
    let (Some(width), Some(height)) = (px(block, "width")?, px(block, "height")?) else {
        bail!("element {:?} on line {} needs width and height", name, block.line);
    };
    let rect = Rect::new(
        px(block, "x")?.unwrap_or(0),
        px(block, "y")?.unwrap_or(0),
        width,
        height,
    );

    let mut el = CanvasElement::new(name, rect)
        .background(color(block, "background", Color::transparent()))
        .padding(Insets::all(px(block, "padding")?.unwrap_or(0)));
    if let Some(tag) = block.prop_str("tag") {
        el = el.tag(tag);
    }
    for class in block.prop_str("class").unwrap_or("").split_whitespace() {
        el = el.class(class);
    }
    if let Some(bw) = px(block, "border_width")? {
        el = el.border(bw, color(block, "border_color", Color::BLACK));
    }
    Ok(el)
}

/// Non-negative whole pixels; fractions are rounded.
fn px(block: &Block, key: &str) -> Result<Option<u32>> {
    match block.prop(key) {
        None => Ok(None),
        Some(Value::Number(n)) if *n >= 0.0 => Ok(Some(n.round() as u32)),
        Some(other) => bail!(
            "{} block on line {}: {} must be a non-negative number, got {:?}",
            block.kind,
            block.line,
            key,
            other
        ),
    }
}

fn color(block: &Block, key: &str, default: Color) -> Color {
    match block.prop(key) {
        Some(Value::Color(c)) => Color::from_array(*c),
        Some(Value::Str(s) | Value::Ident(s)) => Color::parse_or(s, Some(default)),
        Some(Value::Number(_)) | None => default,
    }
}
