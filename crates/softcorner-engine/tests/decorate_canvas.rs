use softcorner_engine::canvas::{Canvas, CanvasElement};
use softcorner_engine::coords::{Insets, Rect};
use softcorner_engine::decorate::{Decorator, Host, Mutation, Rule};
use softcorner_engine::paint::Color;
use softcorner_engine::raster::RasterizerConfig;
use softcorner_engine::style::Descriptor;

const PAGE: Color = Color::rgb(250, 250, 250);
const CARD: Color = Color::rgb(255, 255, 255);

fn board() -> Canvas {
    let mut c = Canvas::new(240, 120, PAGE);
    for (i, x) in [10u32, 90, 170].into_iter().enumerate() {
        c.add(
            CanvasElement::new(format!("card{i}"), Rect::new(x, 20, 60, 70))
                .class("card")
                .background(CARD)
                .border(1, Color::rgb(200, 200, 200))
                .padding(Insets::all(12)),
        );
    }
    c
}

fn shadow_rule() -> Rule {
    Rule::new(
        ".card",
        Descriptor::new()
            .set("borderType", "shadow")
            .set("cornerRadius", "6")
            .set("shadowWidth", "8")
            .set("shadowColor", "rgba(0, 0, 0, 0.6)"),
    )
}

fn px(c: &Canvas, pixels: &[Color], x: u32, y: u32) -> Color {
    pixels[(y * c.size().width + x) as usize]
}

#[test]
fn compute_then_commit_decorates_every_match() {
    let mut canvas = board();
    let mut decorator = Decorator::default();

    let before = canvas.render();
    let plan = decorator.compute(&mut canvas, &[shadow_rule()]);
    assert_eq!(canvas.render(), before, "compute must not mutate the host");
    assert_eq!(plan.elements().len(), 3);

    let strips = plan
        .items()
        .iter()
        .filter(|m| matches!(m, Mutation::InsertStrip { .. }))
        .count();
    assert_eq!(strips, 6);

    plan.commit(&mut canvas);
    for id in canvas.select(".card") {
        assert!(canvas.is_decorated(id));
    }

    // Three identical cards share two corner rasters.
    assert_eq!(decorator.rasterizer().cache().len(), 2);
}

#[test]
fn drop_shadow_is_heavier_below_than_above() {
    let mut canvas = board();
    Decorator::default().decorate(&mut canvas, &[shadow_rule()]);
    let pixels = canvas.render();

    // Card 0 spans x 10..70, y 20..90. The 22px top strip has its outline at
    // y 28 and the shadow centre at y 38; the 26px bottom strip has its outline
    // at y 77 and the shadow centre at y 75. Sample 3 and 6 rows outside.
    let above = px(&canvas, &pixels, 40, 28 - 3);
    let below = px(&canvas, &pixels, 40, 77 + 6);
    assert!(below.r < above.r, "above {above:?} below {below:?}");
}

#[test]
fn identical_cards_render_identically() {
    let mut canvas = board();
    Decorator::new(RasterizerConfig::exact()).decorate(&mut canvas, &[shadow_rule()]);
    let pixels = canvas.render();

    for y in 20..90 {
        for dx in 0..60 {
            let a = px(&canvas, &pixels, 10 + dx, y);
            assert_eq!(a, px(&canvas, &pixels, 90 + dx, y));
            assert_eq!(a, px(&canvas, &pixels, 170 + dx, y));
        }
    }
}

#[test]
fn invalid_rule_leaves_other_rules_working() {
    let mut canvas = board();
    let bad = Rule::new("#card1", Descriptor::new().set("borderType", "groove"));
    let good = Rule::new("#card2", Descriptor::new().set("borderType", "simple").set("cornerRadius", "10"));
    Decorator::default().decorate(&mut canvas, &[bad, good]);

    assert_eq!(canvas.alerts().len(), 1);
    let ids = canvas.select(".card");
    assert!(!canvas.is_decorated(ids[0]));
    assert!(!canvas.is_decorated(ids[1]));
    assert!(canvas.is_decorated(ids[2]));
}
