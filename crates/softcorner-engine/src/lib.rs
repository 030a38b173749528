//! softcorner engine.
//!
//! Procedural rounded-corner, drop-shadow, fade and glow borders. Corners are
//! rasterized into per-row color runs by geometric anti-aliasing against the
//! sampled inner, outer, border and shadow colors; a host materializes them.
//!
//! # Quick start
//!
//! ```rust
//! use softcorner_engine::canvas::{Canvas, CanvasElement};
//! use softcorner_engine::coords::Rect;
//! use softcorner_engine::decorate::{Decorator, Rule};
//! use softcorner_engine::paint::Color;
//! use softcorner_engine::style::Descriptor;
//!
//! let mut canvas = Canvas::new(200, 120, Color::WHITE);
//! canvas.add(CanvasElement::new("panel", Rect::new(20, 20, 160, 80)).background(Color::rgb(230, 236, 255)));
//!
//! let rule = Rule::new(
//!     "#panel",
//!     Descriptor::new()
//!         .set("borderType", "shadow")
//!         .set("cornerRadius", "8")
//!         .set("shadowWidth", "6"),
//! );
//!
//! let mut decorator = Decorator::default();
//! let plan = decorator.compute(&mut canvas, &[rule]);
//! plan.commit(&mut canvas);
//! let pixels = canvas.render();
//! assert_eq!(pixels.len(), 200 * 120);
//! ```

pub mod canvas;
pub mod coords;
pub mod decorate;
pub mod error;
pub mod frame;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod style;

pub use error::{DecorateError, SpecError};
