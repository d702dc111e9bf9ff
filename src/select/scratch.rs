//! Per-pass side table keyed by edge.

use std::collections::HashMap;

use crate::mesh::EdgeId;

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    visits: u32,
    selected_faces: Option<usize>,
}

/// Transient per-edge state owned by a single classification pass.
///
/// The table lives next to the mesh rather than on it, so dropping it is all
/// the cleanup a pass needs, whichever way the pass exits.
#[derive(Debug, Default)]
pub(crate) struct EdgeScratch {
    slots: HashMap<EdgeId, Slot>,
}

impl EdgeScratch {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Count a visit to `e` and return the total including this one.
    pub(crate) fn visit(&mut self, e: EdgeId) -> u32 {
        let slot = self.slots.entry(e).or_default();
        slot.visits += 1;
        slot.visits
    }

    /// Memoised selected face count of `e`, if already computed.
    pub(crate) fn selected_faces(&self, e: EdgeId) -> Option<usize> {
        self.slots.get(&e).and_then(|s| s.selected_faces)
    }

    pub(crate) fn set_selected_faces(&mut self, e: EdgeId, count: usize) {
        self.slots.entry(e).or_default().selected_faces = Some(count);
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visits_are_counted_per_edge() {
        let mut scratch = EdgeScratch::with_capacity(4);
        let a = EdgeId::new(3);
        let b = EdgeId::new(7);

        assert_eq!(scratch.visit(a), 1);
        assert_eq!(scratch.visit(a), 2);
        assert_eq!(scratch.visit(b), 1);
        assert_eq!(scratch.visit(a), 3);
        assert_eq!(scratch.len(), 2);
    }

    #[test]
    fn test_memo_does_not_count_as_visit() {
        let mut scratch = EdgeScratch::default();
        let e = EdgeId::new(1);
        assert_eq!(scratch.selected_faces(e), None);

        scratch.set_selected_faces(e, 2);
        assert_eq!(scratch.selected_faces(e), Some(2));
        assert_eq!(scratch.visit(e), 1);
    }
}
