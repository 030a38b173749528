use crate::coords::{Edge, Insets};
use crate::frame::Strip;
use crate::raster::Row;

use super::ElementId;

/// A pending change to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Moves the element's content into an inner container so the frame can
    /// be placed around it.
    WrapContent { element: ElementId },
    /// New padding for the inner container.
    SetPadding { element: ElementId, padding: Insets },
    /// Fixed height for the inner container.
    SetHeight { element: ElementId, height: u32 },
    /// A top or bottom band.
    InsertStrip { element: ElementId, edge: Edge, strip: Strip },
    /// Side profiles repeated down the element between the strips.
    FrameSides { element: ElementId, left: Option<Row>, right: Option<Row> },
}

impl Mutation {
    #[inline]
    pub fn element(&self) -> ElementId {
        match *self {
            Mutation::WrapContent { element }
            | Mutation::SetPadding { element, .. }
            | Mutation::SetHeight { element, .. }
            | Mutation::InsertStrip { element, .. }
            | Mutation::FrameSides { element, .. } => element,
        }
    }
}
