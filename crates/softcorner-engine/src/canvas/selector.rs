use super::CanvasElement;

/// One simple selector: `*`, `tag`, `#id`, `.class`, or a compound like `div.card`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Simple {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Simple {
    fn parse(s: &str) -> Option<Simple> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let mut out = Simple { tag: None, id: None, classes: Vec::new() };
        let mut rest = s;
        // Leading tag name, if any.
        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        let tag = &rest[..tag_end];
        if !tag.is_empty() && tag != "*" {
            if !is_name(tag) {
                return None;
            }
            out.tag = Some(tag.to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if !is_name(name) {
                return None;
            }
            match marker {
                '#' => out.id = Some(name.to_string()),
                _ => out.classes.push(name.to_string()),
            }
            rest = &body[end..];
        }
        Some(out)
    }

    fn matches(&self, el: &CanvasElement) -> bool {
        self.tag.as_ref().is_none_or(|t| t.eq_ignore_ascii_case(&el.tag))
            && self.id.as_ref().is_none_or(|id| *id == el.id)
            && self.classes.iter().all(|c| el.classes.contains(c))
    }
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Comma-separated list of simple selectors. Descendant combinators are not
/// supported; an unparsable selector matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    alternatives: Vec<Simple>,
}

impl Selector {
    pub(crate) fn parse(s: &str) -> Selector {
        let alternatives: Option<Vec<Simple>> = s.split(',').map(Simple::parse).collect();
        match alternatives {
            Some(alternatives) => Selector { alternatives },
            None => {
                log::debug!("unsupported selector {:?}", s);
                Selector { alternatives: Vec::new() }
            }
        }
    }

    pub(crate) fn matches(&self, el: &CanvasElement) -> bool {
        self.alternatives.iter().any(|s| s.matches(el))
    }
}
