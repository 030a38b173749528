use super::{ElementId, Host, Mutation};

/// Ordered mutations produced by a compute pass.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `commit()` applies items in insertion order and consumes the list
#[derive(Debug, Default)]
pub struct MutationList {
    items: Vec<Mutation>,
}

impl MutationList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, mutation: Mutation) {
        self.items.push(mutation);
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[Mutation] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Distinct elements touched, in first-touch order.
    pub fn elements(&self) -> Vec<ElementId> {
        let mut seen = Vec::new();
        for m in &self.items {
            let id = m.element();
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }

    /// Applies every mutation to `host`, in order. Returns how many were applied.
    pub fn commit<H: Host + ?Sized>(self, host: &mut H) -> usize {
        let n = self.items.len();
        for m in self.items {
            host.apply(m);
        }
        log::debug!("committed {} mutations", n);
        n
    }
}

impl Extend<Mutation> for MutationList {
    fn extend<I: IntoIterator<Item = Mutation>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for MutationList {
    type Item = Mutation;
    type IntoIter = std::vec::IntoIter<Mutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
