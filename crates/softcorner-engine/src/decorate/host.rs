use crate::style::SampledStyle;

use super::Mutation;

/// Opaque handle to an element owned by a [`Host`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// The document a decorator works against.
///
/// Implementations own element lookup, style sampling, user notification and
/// the actual materialization of frames.
pub trait Host {
    /// Elements matching `selector`, in document order. No match is not an error.
    fn select(&self, selector: &str) -> Vec<ElementId>;

    /// Current look of `element`.
    fn sample(&self, element: ElementId) -> SampledStyle;

    /// Blocking, user-facing notification about a caller error.
    fn alert(&mut self, message: &str);

    /// Applies one committed mutation.
    fn apply(&mut self, mutation: Mutation);
}
