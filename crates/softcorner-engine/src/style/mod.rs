//! Declarative border descriptions and sampled host styles.
//!
//! A [`Decoration`] says *what* border an element should get; a
//! [`SampledStyle`] says what the element currently looks like. Together they
//! resolve into a [`BorderSpec`](crate::raster::BorderSpec).

mod border_style;
mod descriptor;
mod sampled;

pub use border_style::{BorderStyle, Decoration};
pub use descriptor::Descriptor;
pub use sampled::SampledStyle;
