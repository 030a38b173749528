use anyhow::{Result, bail};
use softcorner_engine::decorate::Rule;
use softcorner_engine::style::Descriptor;
use softcorner_rules::RuleDocument;

/// Turns every `border "<selector>" { ... }` block into a [`Rule`].
///
/// Property keys pass through unchanged since descriptor lookups ignore case,
/// `_` and `-`; `type` is the one short alias.
pub fn collect_rules(doc: &RuleDocument) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for block in doc.blocks_of("border") {
        let Some(selector) = &block.target else {
            bail!("border block on line {} has no selector", block.line);
        };
        let descriptor: Descriptor = block
            .props
            .iter()
            .map(|p| {
                let key = if p.key == "type" { "borderType" } else { p.key.as_str() };
                (key.to_string(), p.value.to_descriptor_string())
            })
            .collect();
        rules.push(Rule::new(selector.clone(), descriptor));
    }

    for block in doc.blocks.iter().filter(|b| b.kind != "border") {
        log::warn!("ignoring {} block on line {} in rule file", block.kind, block.line);
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use softcorner_engine::style::{BorderStyle, Decoration};
    use softcorner_engine::paint::Color;

    #[test]
    fn border_blocks_become_rules() {
        let doc = softcorner_rules::parse_str(
            r#"
            border ".card" {
                type: shadow
                corner_radius: 8
                shadow_width: 6
                shadow_color: #00000080
                edges: "top bottom"
            }
            "#,
        )
        .unwrap();
        let rules = collect_rules(&doc).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".card");

        let d = &rules[0].descriptor;
        assert_eq!(d.get("borderType"), Some("shadow"));
        assert_eq!(d.get("shadowColor"), Some("#00000080"));

        let deco = Decoration::from_descriptor(d).unwrap();
        assert_eq!(deco.corner_radius, 8);
        assert_eq!(
            deco.style,
            BorderStyle::Shadow { width: 6, color: Color::rgba(0, 0, 0, 128) }
        );
    }

    #[test]
    fn selector_is_required() {
        let doc = softcorner_rules::parse_str("border { corner_radius: 4 }").unwrap();
        let err = collect_rules(&doc).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn other_blocks_are_skipped() {
        let doc = softcorner_rules::parse_str("page { width: 10 }").unwrap();
        assert!(collect_rules(&doc).unwrap().is_empty());
    }
}
