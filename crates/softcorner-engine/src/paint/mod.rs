//! Color model shared between the rasterizer and hosts.
//!
//! Scope:
//! - 8-bit straight-alpha color and per-channel blending
//! - CSS-style color string parsing with fallbacks
//! - radial shadow falloff
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod falloff;
mod parse;

pub use color::Color;
pub use falloff::Falloff;
