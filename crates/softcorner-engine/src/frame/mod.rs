//! Assembles rasterized corners into a complete border frame.

mod border_frame;
mod strip;

pub use border_frame::{BorderFrame, adjust_padding};
pub use strip::Strip;
