// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"top left"`
    Str(String),
    /// Numeric literal: `6` or `0.5`
    Number(f32),
    /// Color literal: `#rrggbb` or `#rrggbbaa`, straight-alpha bytes.
    Color([u8; 4]),
    /// Unquoted identifier: `shadow`, `all`
    Ident(String),
}

impl Value {
    /// Renders the value the way a loosely typed descriptor expects it.
    pub fn to_descriptor_string(&self) -> String {
        match self {
            Value::Str(s) | Value::Ident(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Color([r, g, b, a]) => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based line of the key, for diagnostics.
    pub line: usize,
}

// ── Block ─────────────────────────────────────────────────────────────────

/// A top-level block.
///
/// ```text
/// border "#sidebar" {
///     type: glow
///     glow_width: 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block keyword: `border`, `element`, `page`.
    pub kind: String,
    /// Optional quoted target (a selector for `border`, an id for `element`).
    pub target: Option<String>,
    pub props: Vec<Prop>,
    /// 1-based line of the keyword.
    pub line: usize,
}

impl Block {
    /// Look up a property value by key.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a property as color bytes if it is a `Color`.
    pub fn prop_color(&self, key: &str) -> Option<[u8; 4]> {
        match self.prop(key)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }
}

// ── RuleDocument ──────────────────────────────────────────────────────────

/// The top-level parse result for a rule file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleDocument {
    pub blocks: Vec<Block>,
}

impl RuleDocument {
    /// Blocks of one kind, in source order.
    pub fn blocks_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }
}
