//! Selection set reconciliation and single/multi-select queries.

use std::collections::HashSet;

use uuid::Uuid;

use overtype_core::TextLayer;

/// The set of layer ids currently active for editing. Order-irrelevant.
/// Every id must reference a layer present in the collection; ids of
/// deleted layers are pruned by [`reconcile`](SelectionController::reconcile).
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: HashSet<Uuid>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// `multi = false` replaces the set with `{id}`; `multi = true`
    /// toggles membership of `id`.
    pub fn select(&mut self, id: Uuid, multi: bool) {
        if multi {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }
    }

    /// Replace the set with exactly `{id}`.
    pub fn select_only(&mut self, id: Uuid) {
        self.selected.clear();
        self.selected.insert(id);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop every selected id that no longer references a live layer.
    /// Idempotent; never records history.
    pub fn reconcile(&mut self, layers: &[TextLayer]) {
        self.selected.retain(|id| layers.iter().any(|l| l.id == *id));
    }

    // ───────────────────── queries ─────────────────────

    pub fn contains(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Exactly one layer selected: position/shape edits allowed.
    pub fn is_single(&self) -> bool {
        self.selected.len() == 1
    }

    /// Two or more selected: shared-property edits and group geometry
    /// ops only.
    pub fn is_multi(&self) -> bool {
        self.selected.len() >= 2
    }

    pub fn can_align(&self) -> bool {
        self.selected.len() >= 2
    }

    pub fn can_distribute(&self) -> bool {
        self.selected.len() >= 3
    }

    /// The sole selected id, when single-select.
    pub fn only(&self) -> Option<Uuid> {
        if self.is_single() {
            self.selected.iter().next().copied()
        } else {
            None
        }
    }

    /// Selected ids in arbitrary order.
    pub fn ids(&self) -> Vec<Uuid> {
        self.selected.iter().copied().collect()
    }
}
