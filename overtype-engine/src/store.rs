//! Canonical ordered layer collection.
//!
//! The store owns a `Vec<TextLayer>` whose index order is paint order
//! (index 0 bottom-most). Mutations are synchronous and atomic from the
//! caller's perspective; history installs replace the whole collection.
//! Locked layers are immutable except for lock toggling and deletion.

use uuid::Uuid;

use overtype_core::{LayerEdit, StyleTemplate, TextLayer, WarpEdit};
use overtype_geometry::{encode_descriptor, path_descriptor};

use crate::EngineError;

/// Z-order move for a single layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Swap with the layer above.
    Up,
    /// Swap with the layer below.
    Down,
    /// Move to the top of the paint order.
    Front,
    /// Move to the bottom of the paint order.
    Back,
}

#[derive(Debug, Default)]
pub struct LayerStore {
    layers: Vec<TextLayer>,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layers(layers: Vec<TextLayer>) -> Self {
        Self { layers }
    }

    // ───────────────────── queries ─────────────────────

    pub fn layers(&self) -> &[TextLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&TextLayer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Full clone of the collection — one history snapshot.
    pub fn snapshot(&self) -> Vec<TextLayer> {
        self.layers.clone()
    }

    // ───────────────────── mutation ─────────────────────

    /// Replace the whole collection (history replay, session restore).
    pub fn install(&mut self, layers: Vec<TextLayer>) {
        self.layers = layers;
    }

    /// Create a layer from the style template, appended at the top of
    /// the paint order.
    pub fn add_from_template(&mut self, template: &StyleTemplate) -> Uuid {
        let mut layer = TextLayer::from_template(template);
        refresh_descriptor(&mut layer);
        let id = layer.id;
        self.layers.push(layer);
        id
    }

    /// Apply every edit to every unlocked layer in `ids`. Returns the
    /// ids actually edited, in paint order.
    pub fn update(&mut self, ids: &[Uuid], edits: &[LayerEdit]) -> Vec<Uuid> {
        // Any warp edit except an explicit descriptor write invalidates
        // the cached descriptor.
        let warp_changed = edits
            .iter()
            .any(|e| matches!(e, LayerEdit::Warp(w) if !matches!(w, WarpEdit::Descriptor(_))));

        let mut edited = Vec::new();
        for layer in &mut self.layers {
            if !ids.contains(&layer.id) {
                continue;
            }
            if layer.locked {
                log::debug!("skipping edit of locked layer {}", layer.id);
                continue;
            }
            for edit in edits {
                edit.apply(layer);
            }
            if warp_changed {
                refresh_descriptor(layer);
            }
            edited.push(layer.id);
        }
        edited
    }

    /// Remove the given layers. Returns the removed ids.
    pub fn delete(&mut self, ids: &[Uuid]) -> Vec<Uuid> {
        let mut removed = Vec::new();
        self.layers.retain(|layer| {
            if ids.contains(&layer.id) {
                removed.push(layer.id);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Move one unlocked layer in the paint order. Returns `false` when
    /// the layer is already at the requested boundary (a no-op, not an
    /// error).
    pub fn reorder(&mut self, id: Uuid, direction: Direction) -> Result<bool, EngineError> {
        let index = self.index_of(id).ok_or(EngineError::LayerNotFound(id))?;
        if self.layers[index].locked {
            return Err(EngineError::LayerLocked(id));
        }

        let top = self.layers.len() - 1;
        let moved = match direction {
            Direction::Up if index < top => {
                self.layers.swap(index, index + 1);
                true
            }
            Direction::Down if index > 0 => {
                self.layers.swap(index, index - 1);
                true
            }
            Direction::Front if index < top => {
                let layer = self.layers.remove(index);
                self.layers.push(layer);
                true
            }
            Direction::Back if index > 0 => {
                let layer = self.layers.remove(index);
                self.layers.insert(0, layer);
                true
            }
            _ => false,
        };
        Ok(moved)
    }

    /// Clone a layer with a fresh id, +20/+20 offset, always unlocked,
    /// placed at the top of the paint order.
    pub fn duplicate(&mut self, id: Uuid) -> Result<Uuid, EngineError> {
        let source = self.get(id).ok_or(EngineError::LayerNotFound(id))?;
        let copy = source.duplicated();
        let copy_id = copy.id;
        self.layers.push(copy);
        Ok(copy_id)
    }

    /// Group-consistent lock toggle: if every addressed layer is locked,
    /// unlock all of them; otherwise lock all of them.
    pub fn toggle_lock(&mut self, ids: &[Uuid]) {
        let addressed: Vec<usize> = self
            .layers
            .iter()
            .enumerate()
            .filter(|(_, l)| ids.contains(&l.id))
            .map(|(i, _)| i)
            .collect();
        if addressed.is_empty() {
            return;
        }

        let all_locked = addressed.iter().all(|&i| self.layers[i].locked);
        for i in addressed {
            self.layers[i].locked = !all_locked;
        }
    }

    /// Direct positional write used by group geometry ops. Locked
    /// layers are left untouched.
    pub fn set_coord(&mut self, id: Uuid, x: Option<f32>, y: Option<f32>) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.id == id && !l.locked) {
            if let Some(x) = x {
                layer.x = x;
            }
            if let Some(y) = y {
                layer.y = y;
            }
        }
    }
}

/// Rebuild the cached warp descriptor from the layer's current warp
/// parameters.
fn refresh_descriptor(layer: &mut TextLayer) {
    layer.warp.descriptor = if layer.warp.enabled {
        let commands = path_descriptor(layer.warp.path, layer.warp.radius, layer.warp.angle);
        Some(encode_descriptor(&commands))
    } else {
        None
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use overtype_core::{TypographyEdit, WarpPath};

    fn store_with(n: usize) -> (LayerStore, Vec<Uuid>) {
        let mut store = LayerStore::new();
        let template = StyleTemplate::default();
        let ids = (0..n).map(|_| store.add_from_template(&template)).collect();
        (store, ids)
    }

    #[test]
    fn test_add_appends_at_top() {
        let (store, ids) = store_with(3);
        assert_eq!(store.index_of(ids[2]), Some(2));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_skips_locked_layers() {
        let (mut store, ids) = store_with(2);
        store.toggle_lock(&[ids[0]]);

        let edited = store.update(&ids, &[LayerEdit::Typography(TypographyEdit::FontSize(64.0))]);
        assert_eq!(edited, vec![ids[1]]);
        assert_ne!(store.get(ids[0]).unwrap().style.font_size, 64.0);
        assert_eq!(store.get(ids[1]).unwrap().style.font_size, 64.0);
    }

    #[test]
    fn test_warp_edit_refreshes_descriptor() {
        let (mut store, ids) = store_with(1);
        store.update(&ids, &[LayerEdit::Warp(WarpEdit::Enabled(true))]);
        assert!(store.get(ids[0]).unwrap().warp.descriptor.is_some());

        store.update(&ids, &[LayerEdit::Warp(WarpEdit::Enabled(false))]);
        assert!(store.get(ids[0]).unwrap().warp.descriptor.is_none());
    }

    #[test]
    fn test_delete_returns_removed_ids() {
        let (mut store, ids) = store_with(3);
        let removed = store.delete(&[ids[0], ids[2]]);
        assert_eq!(removed, vec![ids[0], ids[2]]);
        assert_eq!(store.len(), 1);
        assert!(store.contains(ids[1]));
    }

    #[test]
    fn test_reorder_swaps_and_respects_boundaries() {
        let (mut store, ids) = store_with(3);

        assert!(store.reorder(ids[0], Direction::Up).unwrap());
        assert_eq!(store.index_of(ids[0]), Some(1));

        // Already at the bottom: no-op, not an error.
        assert!(!store.reorder(ids[1], Direction::Down).unwrap());

        assert!(store.reorder(ids[1], Direction::Front).unwrap());
        assert_eq!(store.index_of(ids[1]), Some(2));

        assert!(store.reorder(ids[1], Direction::Back).unwrap());
        assert_eq!(store.index_of(ids[1]), Some(0));
    }

    #[test]
    fn test_reorder_locked_layer_is_an_error() {
        let (mut store, ids) = store_with(2);
        store.toggle_lock(&[ids[0]]);
        assert_eq!(
            store.reorder(ids[0], Direction::Up),
            Err(EngineError::LayerLocked(ids[0]))
        );
    }

    #[test]
    fn test_duplicate_offsets_and_unlocks() {
        let (mut store, ids) = store_with(1);
        store.toggle_lock(&[ids[0]]);

        let copy = store.duplicate(ids[0]).unwrap();
        let source = store.get(ids[0]).unwrap().clone();
        let clone = store.get(copy).unwrap();

        assert_ne!(copy, ids[0]);
        assert_eq!(clone.x, source.x + 20.0);
        assert_eq!(clone.y, source.y + 20.0);
        assert!(!clone.locked);
        assert!(source.locked);
    }

    #[test]
    fn test_toggle_lock_is_group_consistent() {
        let (mut store, ids) = store_with(3);

        // Mixed state → lock everything.
        store.toggle_lock(&[ids[0]]);
        store.toggle_lock(&ids);
        assert!(store.layers().iter().all(|l| l.locked));

        // All locked → unlock everything.
        store.toggle_lock(&ids);
        assert!(store.layers().iter().all(|l| !l.locked));
    }

    #[test]
    fn test_unknown_ids_are_errors_where_identity_matters() {
        let (mut store, _) = store_with(1);
        let ghost = Uuid::new_v4();
        assert_eq!(
            store.reorder(ghost, Direction::Up),
            Err(EngineError::LayerNotFound(ghost))
        );
        assert_eq!(store.duplicate(ghost), Err(EngineError::LayerNotFound(ghost)));
    }
}
