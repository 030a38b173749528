//! Geometry types shared by the rasterizer, frame builder and hosts.
//!
//! Canonical space:
//! - Integer device pixels
//! - Origin top-left
//! - +X right, +Y down

mod edges;
mod insets;
mod rect;

pub use edges::{Edge, EdgeSet};
pub use insets::Insets;
pub use rect::{Rect, Size};
