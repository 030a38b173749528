use crate::coords::Edge;
use crate::frame::{BorderFrame, adjust_padding};
use crate::raster::{Rasterizer, RasterizerConfig};
use crate::style::{Decoration, Descriptor};

use super::{ElementId, Host, Mutation, MutationList};

/// A selector plus the border every matching element should get.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub descriptor: Descriptor,
}

impl Rule {
    pub fn new(selector: impl Into<String>, descriptor: Descriptor) -> Self {
        Self { selector: selector.into(), descriptor }
    }
}

/// Turns rules into committed border frames.
///
/// Owns the [`Rasterizer`] and therefore the corner cache, so elements that
/// share a style across passes share rasters too.
#[derive(Debug, Default)]
pub struct Decorator {
    rasterizer: Rasterizer,
}

impl Decorator {
    pub fn new(config: RasterizerConfig) -> Self {
        Self { rasterizer: Rasterizer::new(config) }
    }

    #[inline]
    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    #[inline]
    pub fn rasterizer_mut(&mut self) -> &mut Rasterizer {
        &mut self.rasterizer
    }

    /// Compute phase: plans every rule against `host` without mutating it.
    ///
    /// A rule with an invalid descriptor is reported through [`Host::alert`]
    /// and skipped; the remaining rules still run.
    pub fn compute<H: Host + ?Sized>(&mut self, host: &mut H, rules: &[Rule]) -> MutationList {
        let mut list = MutationList::new();

        for rule in rules {
            let elements = host.select(&rule.selector);
            if elements.is_empty() {
                log::debug!("selector {:?} matched nothing", rule.selector);
                continue;
            }

            let decoration = match Decoration::from_descriptor(&rule.descriptor) {
                Ok(d) => d,
                Err(err) => {
                    log::warn!("rule {:?} rejected: {}", rule.selector, err);
                    host.alert(&format!("{}: {}", rule.selector, err));
                    continue;
                }
            };

            for element in elements {
                self.plan_element(host, element, &decoration, &mut list);
            }
        }

        log::debug!(
            "computed {} mutations for {} elements",
            list.len(),
            list.elements().len()
        );
        list
    }

    /// Compute, then commit. Returns the number of applied mutations.
    pub fn decorate<H: Host + ?Sized>(&mut self, host: &mut H, rules: &[Rule]) -> usize {
        let list = self.compute(host, rules);
        list.commit(host)
    }

    fn plan_element<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        element: ElementId,
        decoration: &Decoration,
        list: &mut MutationList,
    ) {
        let sampled = host.sample(element);
        let spec = match decoration.resolve(&sampled) {
            Ok(spec) => spec,
            Err(err) => {
                log::warn!("element {:?} skipped: {}", element, err);
                host.alert(&format!("element {}: {}", element.0, err));
                return;
            }
        };

        let frame = BorderFrame::build(&mut self.rasterizer, &spec, decoration.edges);
        if frame.is_empty() {
            log::debug!("element {:?} has no edges to decorate", element);
            return;
        }

        list.push(Mutation::WrapContent { element });
        list.push(Mutation::SetPadding {
            element,
            padding: adjust_padding(sampled.padding, frame.insets),
        });
        if let Some(height) = decoration.height {
            list.push(Mutation::SetHeight {
                element,
                height: height.saturating_sub(frame.insets.vertical()),
            });
        }

        let BorderFrame { top, bottom, left, right, .. } = frame;
        if let Some(strip) = top {
            list.push(Mutation::InsertStrip { element, edge: Edge::Top, strip });
        }
        if left.is_some() || right.is_some() {
            list.push(Mutation::FrameSides { element, left, right });
        }
        if let Some(strip) = bottom {
            list.push(Mutation::InsertStrip { element, edge: Edge::Bottom, strip });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Insets, Size};
    use crate::paint::Color;
    use crate::style::SampledStyle;

    /// Host with one element per selector name; records everything.
    #[derive(Default)]
    struct Recorder {
        names: Vec<&'static str>,
        alerts: Vec<String>,
        applied: Vec<Mutation>,
    }

    impl Host for Recorder {
        fn select(&self, selector: &str) -> Vec<ElementId> {
            self.names
                .iter()
                .enumerate()
                .filter(|(_, n)| **n == selector)
                .map(|(i, _)| ElementId(i))
                .collect()
        }

        fn sample(&self, _element: ElementId) -> SampledStyle {
            SampledStyle {
                background: Color::rgb(230, 230, 230),
                ancestors: vec![Color::WHITE],
                border_width: 1,
                border_color: Color::rgb(90, 90, 90),
                padding: Insets::all(12),
                size: Size::new(120, 60),
            }
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn apply(&mut self, mutation: Mutation) {
            self.applied.push(mutation);
        }
    }

    fn rule(selector: &str, pairs: &[(&str, &str)]) -> Rule {
        Rule::new(selector, pairs.iter().copied().collect())
    }

    #[test]
    fn compute_does_not_touch_host() {
        let mut host = Recorder { names: vec!["#a", "#b"], ..Default::default() };
        let mut deco = Decorator::default();
        let list = deco.compute(&mut host, &[rule("#a", &[("borderType", "simple"), ("cornerRadius", "6")])]);

        assert!(host.applied.is_empty());
        assert_eq!(list.elements(), vec![ElementId(0)]);
        assert!(matches!(list.items()[0], Mutation::WrapContent { element: ElementId(0) }));
        assert_eq!(
            list.items()[1],
            Mutation::SetPadding { element: ElementId(0), padding: Insets::all(6) }
        );

        let n = list.commit(&mut host);
        assert_eq!(host.applied.len(), n);
    }

    #[test]
    fn unknown_type_alerts_and_other_rules_proceed() {
        let mut host = Recorder { names: vec!["#a", "#b"], ..Default::default() };
        let mut deco = Decorator::default();
        let rules = [
            rule("#a", &[("borderType", "wavy")]),
            rule("#b", &[("borderType", "glow"), ("cornerRadius", "4"), ("glowWidth", "4")]),
        ];
        deco.decorate(&mut host, &rules);

        assert_eq!(host.alerts.len(), 1);
        assert!(host.alerts[0].contains("wavy"));
        assert!(host.applied.iter().all(|m| m.element() == ElementId(1)));
        assert!(!host.applied.is_empty());
    }

    #[test]
    fn missing_type_and_huge_radius_alert() {
        let mut host = Recorder { names: vec!["#a", "#b"], ..Default::default() };
        let mut deco = Decorator::default();
        let rules = [
            rule("#a", &[("cornerRadius", "4")]),
            rule("#b", &[("borderType", "glow"), ("cornerRadius", "4294967295"), ("glowWidth", "5")]),
        ];
        deco.decorate(&mut host, &rules);

        assert_eq!(host.alerts.len(), 2);
        assert!(host.alerts[1].contains("maximum"));
        assert!(host.applied.is_empty());
        assert!(deco.rasterizer().cache().is_empty());
    }

    #[test]
    fn missing_selector_is_a_noop() {
        let mut host = Recorder::default();
        let mut deco = Decorator::default();
        let list = deco.compute(&mut host, &[rule("#ghost", &[("borderType", "nonsense")])]);
        assert!(list.is_empty());
        assert!(host.alerts.is_empty());
    }

    #[test]
    fn height_and_edges_shape_the_plan() {
        let mut host = Recorder { names: vec!["#a"], ..Default::default() };
        let mut deco = Decorator::default();
        let list = deco.compute(
            &mut host,
            &[rule("#a", &[("borderType", "simple"), ("cornerRadius", "5"), ("edges", "top"), ("height", "40")])],
        );

        let kinds: Vec<_> = list
            .items()
            .iter()
            .map(|m| match m {
                Mutation::WrapContent { .. } => "wrap",
                Mutation::SetPadding { .. } => "padding",
                Mutation::SetHeight { height, .. } => {
                    assert_eq!(*height, 35);
                    "height"
                }
                Mutation::InsertStrip { edge, .. } => {
                    assert_eq!(*edge, Edge::Top);
                    "strip"
                }
                Mutation::FrameSides { .. } => "sides",
            })
            .collect();
        assert_eq!(kinds, vec!["wrap", "padding", "height", "strip"]);
    }

    #[test]
    fn shared_styles_share_rasters() {
        let mut host = Recorder { names: vec![".card", ".card", ".card"], ..Default::default() };
        let mut deco = Decorator::default();
        deco.compute(&mut host, &[rule(".card", &[("borderType", "shadow"), ("cornerRadius", "6"), ("shadowWidth", "4")])]);
        assert_eq!(deco.rasterizer().cache().len(), 2);
        assert_eq!(deco.rasterizer().cache().stats(), (4, 2));
    }
}
