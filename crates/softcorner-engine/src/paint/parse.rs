use super::Color;

/// Named colors accepted by [`Color::parse`]. CSS basic keywords only.
const NAMED: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("silver", Color::rgb(192, 192, 192)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("white", Color::rgb(255, 255, 255)),
    ("maroon", Color::rgb(128, 0, 0)),
    ("red", Color::rgb(255, 0, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("fuchsia", Color::rgb(255, 0, 255)),
    ("green", Color::rgb(0, 128, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("olive", Color::rgb(128, 128, 0)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("navy", Color::rgb(0, 0, 128)),
    ("blue", Color::rgb(0, 0, 255)),
    ("teal", Color::rgb(0, 128, 128)),
    ("aqua", Color::rgb(0, 255, 255)),
    ("transparent", Color::transparent()),
];

impl Color {
    /// Parses a CSS-style color string.
    ///
    /// Accepted forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)` (alpha as a `0..=1` float) and the
    /// basic named colors. Surrounding whitespace and case are ignored.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            return parse_rgb_args(args, true);
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return parse_rgb_args(args, false);
        }

        NAMED.iter().find(|(name, _)| *name == lower).map(|&(_, c)| c)
    }

    /// Like [`parse`](Self::parse) but never fails.
    ///
    /// Malformed input yields `default`, or opaque black when no default is given.
    pub fn parse_or(s: &str, default: Option<Color>) -> Color {
        match Color::parse(s) {
            Some(c) => c,
            None => {
                log::debug!("unrecognized color {:?}, using fallback", s);
                default.unwrap_or(Color::BLACK)
            }
        }
    }
}

fn function_args<'s>(s: &'s str, name: &str) -> Option<&'s str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 | 4 => {
            let r = nibble(0)? * 17;
            let g = nibble(1)? * 17;
            let b = nibble(2)? * 17;
            let a = if hex.len() == 4 { nibble(3)? * 17 } else { 255 };
            Some(Color::rgba(r, g, b, a))
        }
        6 | 8 => {
            let a = if hex.len() == 8 { byte(6)? } else { 255 };
            Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, a))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |p: &str| -> Option<u8> {
        let v: f32 = p.parse().ok()?;
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let a: f32 = parts[3].parse().ok()?;
        if !a.is_finite() {
            return None;
        }
        (a.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        255
    };
    Some(Color::rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse("#0008"), Some(Color::rgba(0, 0, 0, 136)));
        assert_eq!(Color::parse("#1a2b3c"), Some(Color::rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(Color::parse("#1a2b3c80"), Some(Color::rgba(0x1a, 0x2b, 0x3c, 0x80)));
    }

    #[test]
    fn functional_forms() {
        assert_eq!(Color::parse("rgb(10, 20, 30)"), Some(Color::rgb(10, 20, 30)));
        assert_eq!(Color::parse("RGBA(10,20,30,0.5)"), Some(Color::rgba(10, 20, 30, 128)));
        assert_eq!(Color::parse("rgb(300, -4, 7)"), Some(Color::rgb(255, 0, 7)));
    }

    #[test]
    fn rgba_alpha_is_a_unit_fraction() {
        assert_eq!(Color::parse("rgba(0, 0, 0, 0.6)"), Some(Color::rgba(0, 0, 0, 153)));
        assert_eq!(Color::parse("rgba(0, 0, 0, 0)"), Some(Color::rgba(0, 0, 0, 0)));
        // Byte-style alphas saturate to opaque.
        assert_eq!(Color::parse("rgba(0, 0, 0, 128)"), Some(Color::BLACK));
    }

    #[test]
    fn named_and_transparent() {
        assert_eq!(Color::parse(" Red "), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::parse("transparent"), Some(Color::transparent()));
    }

    #[test]
    fn malformed_is_none() {
        for s in ["", "#12", "#xyz", "#12345", "rgb(1,2)", "rgba(1,2,3)", "rgb(a,b,c)", "chartreuse-ish"] {
            assert_eq!(Color::parse(s), None, "{s:?}");
        }
    }

    #[test]
    fn parse_or_falls_back() {
        let teal = Color::rgb(0, 128, 128);
        assert_eq!(Color::parse_or("nope", Some(teal)), teal);
        assert_eq!(Color::parse_or("nope", None), Color::BLACK);
        assert_eq!(Color::parse_or("#fff", None), Color::WHITE);
    }
}
