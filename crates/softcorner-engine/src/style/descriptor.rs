use crate::coords::EdgeSet;
use crate::error::DecorateError;
use crate::paint::Color;

use super::{BorderStyle, Decoration};

/// Loosely typed border description, as written by a caller.
///
/// Keys are matched without regard to case or underscores, so `cornerRadius`,
/// `corner_radius` and `CORNERRADIUS` are the same key. Recognized keys:
/// `borderType`, `cornerRadius`, `shadowWidth` / `glowWidth`,
/// `shadowColor` / `glowColor`, `edges`, `height`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descriptor {
    entries: Vec<(String, String)>,
}

impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let norm = normalize(&key);
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| normalize(k) == norm) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let norm = normalize(key);
        self.entries
            .iter()
            .find(|(k, _)| normalize(k) == norm)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Descriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = Descriptor::new();
        for (k, v) in iter {
            d.insert(k, v);
        }
        d
    }
}

/// Corner radius when a descriptor names none.
const DEFAULT_CORNER_RADIUS: u32 = 8;
/// Shadow width when a shadow descriptor names none.
const DEFAULT_SHADOW_WIDTH: u32 = 8;

impl Decoration {
    /// Builds a decoration from a loosely typed descriptor.
    ///
    /// `borderType` is required. Missing values take these defaults: corner
    /// radius 8, shadow width 8 in black, glow width equal to the corner
    /// radius in white. Malformed colors fall back to the same defaults.
    pub fn from_descriptor(d: &Descriptor) -> Result<Decoration, DecorateError> {
        let corner_radius = match d.get("cornerRadius") {
            Some(v) => parse_px("cornerRadius", v)?,
            None => DEFAULT_CORNER_RADIUS,
        };
        let width = |key: &str, default: u32| -> Result<u32, DecorateError> {
            d.get(key).map_or(Ok(default), |v| parse_px(key, v))
        };
        let color = |key: &str, default: Color| -> Color {
            d.get(key).map_or(default, |v| Color::parse_or(v, Some(default)))
        };

        let kind = d.get("borderType").unwrap_or("").trim().to_ascii_lowercase();
        let style = match kind.as_str() {
            "simple" => BorderStyle::Simple,
            "shadow" => BorderStyle::Shadow {
                width: width("shadowWidth", DEFAULT_SHADOW_WIDTH)?,
                color: color("shadowColor", Color::BLACK),
            },
            "fade" => BorderStyle::Fade,
            "glow" => BorderStyle::Glow {
                width: width("glowWidth", corner_radius)?,
                color: color("glowColor", Color::WHITE),
            },
            _ => return Err(DecorateError::UnknownBorderType(kind)),
        };

        let edges = match d.get("edges") {
            Some(v) => EdgeSet::parse(v).map_err(DecorateError::UnknownEdge)?,
            None => EdgeSet::all(),
        };
        let height = d.get("height").map(|v| parse_px("height", v)).transpose()?;

        Ok(Decoration { corner_radius, style, edges, height })
    }
}

fn normalize(key: &str) -> String {
    key.chars()
        .filter(|&c| c != '_' && c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parses a non-negative pixel count, accepting an optional `px` suffix.
fn parse_px(key: &str, value: &str) -> Result<u32, DecorateError> {
    let invalid = || DecorateError::InvalidValue { key: key.to_string(), value: value.to_string() };
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    let v: f32 = number.parse().map_err(|_| invalid())?;
    if !v.is_finite() || v < 0.0 {
        return Err(invalid());
    }
    Ok(v.round() as u32)
}
