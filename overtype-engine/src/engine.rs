//! Editor engine facade.
//!
//! Owns the layer store, history manager, selection controller, and the
//! non-persisted "current style" template. Every persisted-content
//! mutation that goes through here hands the resulting collection to
//! the history manager exactly once, and flags the engine dirty so the
//! session can schedule a debounced save.

use uuid::Uuid;

use overtype_core::{LayerEdit, StyleTemplate, TextLayer, TransformEdit};
use overtype_geometry::{alignment_target, distribute_targets, Axis};
use overtype_persist::SavedState;

use crate::history::HistoryManager;
use crate::selection::SelectionController;
use crate::store::{Direction, LayerStore};
use crate::EngineError;

/// Raw gesture reports from the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Click/tap on a layer, with the multi-select modifier state.
    Click { id: Uuid, multi: bool },
    /// Drag finished; the surface reports the new anchor.
    DragEnd { id: Uuid, x: f32, y: f32 },
    /// Resize/rotate handle released; full transform report.
    TransformEnd {
        id: Uuid,
        x: f32,
        y: f32,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
    },
}

pub struct EditorEngine {
    store: LayerStore,
    history: HistoryManager,
    selection: SelectionController,
    template: StyleTemplate,
    dirty: bool,
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorEngine {
    pub fn new() -> Self {
        Self {
            store: LayerStore::new(),
            history: HistoryManager::new(Vec::new()),
            selection: SelectionController::new(),
            template: StyleTemplate::default(),
            dirty: false,
        }
    }

    /// Rebuild an engine from a restored autosave.
    pub fn from_saved(saved: SavedState) -> Self {
        let fallback = saved.layers.clone();
        Self {
            store: LayerStore::from_layers(saved.layers),
            history: HistoryManager::from_saved(saved.history, saved.current_step, fallback),
            selection: SelectionController::new(),
            template: StyleTemplate::default(),
            dirty: false,
        }
    }

    // ───────────────────── queries ─────────────────────

    pub fn layers(&self) -> &[TextLayer] {
        self.store.layers()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn template(&self) -> &StyleTemplate {
        &self.template
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Engine state destined for the autosave record.
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            layers: self.store.snapshot(),
            history: self.history.entries().to_vec(),
            current_step: self.history.cursor(),
        }
    }

    /// Whether a persisted-content mutation happened since the last
    /// call. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ───────────────────── mutation ─────────────────────

    /// Create a layer seeded from the current style template. The new
    /// layer becomes the sole selection.
    pub fn add_layer(&mut self) -> Uuid {
        let id = self.store.add_from_template(&self.template);
        self.selection.select_only(id);
        self.commit();
        id
    }

    /// Apply edits to every unlocked layer in `ids`. A style-family
    /// edit also refreshes the "last used style" template from the
    /// first edited layer. Returns the ids actually edited.
    pub fn update_layers(&mut self, ids: &[Uuid], edits: &[LayerEdit]) -> Vec<Uuid> {
        let edited = self.store.update(ids, edits);
        if edited.is_empty() {
            return edited;
        }

        if edits.iter().any(is_style_edit) {
            if let Some(layer) = self.store.get(edited[0]) {
                self.template = StyleTemplate::from_layer(layer);
            }
        }
        self.commit();
        edited
    }

    /// Apply edits to the current selection.
    pub fn update_selected(&mut self, edits: &[LayerEdit]) -> Vec<Uuid> {
        self.update_layers(&self.selection.ids(), edits)
    }

    /// Delete the given layers and prune them from the selection.
    pub fn delete_layers(&mut self, ids: &[Uuid]) -> Vec<Uuid> {
        let removed = self.store.delete(ids);
        if removed.is_empty() {
            return removed;
        }
        self.selection.reconcile(self.store.layers());
        self.commit();
        removed
    }

    pub fn delete_selected(&mut self) -> Vec<Uuid> {
        self.delete_layers(&self.selection.ids())
    }

    /// Move the single selected, unlocked layer in the paint order.
    /// Returns `false` for a boundary no-op (nothing recorded).
    pub fn reorder(&mut self, direction: Direction) -> Result<bool, EngineError> {
        let id = self.selection.only().ok_or(EngineError::ReorderRequiresSingle)?;
        let moved = self.store.reorder(id, direction)?;
        if moved {
            self.commit();
        }
        Ok(moved)
    }

    /// Clone a layer; the clone becomes the sole selection.
    pub fn duplicate(&mut self, id: Uuid) -> Result<Uuid, EngineError> {
        let copy = self.store.duplicate(id)?;
        self.selection.select_only(copy);
        self.commit();
        Ok(copy)
    }

    /// Group-consistent lock toggle over the current selection.
    pub fn toggle_lock_selected(&mut self) {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return;
        }
        self.store.toggle_lock(&ids);
        self.commit();
    }

    /// Line the selected layers up on a shared horizontal baseline:
    /// every selected unlocked layer's y becomes their mean y.
    pub fn align_horizontal(&mut self) -> Result<(), EngineError> {
        self.align(Axis::Vertical)
    }

    /// Line the selected layers up on a shared vertical line: every
    /// selected unlocked layer's x becomes their mean x.
    pub fn align_vertical(&mut self) -> Result<(), EngineError> {
        self.align(Axis::Horizontal)
    }

    fn align(&mut self, coord_axis: Axis) -> Result<(), EngineError> {
        let movable = self.movable_selected();
        let refs: Vec<&TextLayer> = movable
            .iter()
            .filter_map(|id| self.store.get(*id))
            .collect();
        let target = alignment_target(&refs, coord_axis).ok_or(EngineError::NotEnoughSelected {
            required: 2,
            got: refs.len(),
        })?;

        for id in movable {
            match coord_axis {
                Axis::Horizontal => self.store.set_coord(id, Some(target), None),
                Axis::Vertical => self.store.set_coord(id, None, Some(target)),
            }
        }
        self.commit();
        Ok(())
    }

    /// Spread the selected layers evenly along the axis: sorted by the
    /// axis coordinate, endpoints stay put, interior layers move to
    /// uniform spacing.
    pub fn distribute(&mut self, axis: Axis) -> Result<(), EngineError> {
        let movable = self.movable_selected();
        let refs: Vec<&TextLayer> = movable
            .iter()
            .filter_map(|id| self.store.get(*id))
            .collect();
        let targets = distribute_targets(&refs, axis).ok_or(EngineError::NotEnoughSelected {
            required: 3,
            got: refs.len(),
        })?;

        for (id, coord) in targets {
            match axis {
                Axis::Horizontal => self.store.set_coord(id, Some(coord), None),
                Axis::Vertical => self.store.set_coord(id, None, Some(coord)),
            }
        }
        self.commit();
        Ok(())
    }

    /// Step back one history entry. Selection does not survive time
    /// travel: ids from another point in history may not exist or may
    /// mean something different.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.install(snapshot);
                true
            }
            None => false,
        }
    }

    /// Step forward one history entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.install(snapshot);
                true
            }
            None => false,
        }
    }

    /// Selection ingress from the rendering surface.
    pub fn select(&mut self, id: Uuid, multi: bool) {
        if self.store.contains(id) {
            self.selection.select(id, multi);
        } else {
            log::debug!("ignoring selection of unknown layer {id}");
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Apply a raw gesture report from the rendering surface.
    pub fn apply_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Click { id, multi } => self.select(id, multi),
            Gesture::DragEnd { id, x, y } => {
                self.update_layers(&[id], &[LayerEdit::Position { x, y }]);
            }
            Gesture::TransformEnd {
                id,
                x,
                y,
                rotation,
                scale_x,
                scale_y,
            } => {
                self.update_layers(
                    &[id],
                    &[
                        LayerEdit::Position { x, y },
                        LayerEdit::Transform(TransformEdit::Rotation(rotation)),
                        LayerEdit::Transform(TransformEdit::ScaleX(scale_x)),
                        LayerEdit::Transform(TransformEdit::ScaleY(scale_y)),
                    ],
                );
            }
        }
    }

    /// Full reset: empty collection, fresh history, no selection.
    pub fn reset(&mut self) {
        self.store = LayerStore::new();
        self.history = HistoryManager::new(Vec::new());
        self.selection.clear();
        self.dirty = true;
    }

    // ───────────────────── internals ─────────────────────

    /// Record the post-mutation collection exactly once and mark the
    /// engine dirty for the autosave debounce.
    fn commit(&mut self) {
        self.history.record(self.store.snapshot());
        self.dirty = true;
    }

    /// Install a replayed snapshot. The history's one-shot replay flag
    /// swallows the `record` this triggers, so replays never create
    /// history entries of their own.
    fn install(&mut self, snapshot: Vec<TextLayer>) {
        self.store.install(snapshot);
        self.selection.clear();
        self.commit();
    }

    /// Selected layers that group geometry ops may move, in paint order.
    fn movable_selected(&self) -> Vec<Uuid> {
        self.store
            .layers()
            .iter()
            .filter(|l| self.selection.contains(l.id) && !l.locked)
            .map(|l| l.id)
            .collect()
    }
}

fn is_style_edit(edit: &LayerEdit) -> bool {
    matches!(
        edit,
        LayerEdit::Typography(_)
            | LayerEdit::Shadow(_)
            | LayerEdit::Warp(_)
            | LayerEdit::Hint(_)
            | LayerEdit::ParagraphWidth(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use overtype_core::TypographyEdit;

    fn engine_with(n: usize) -> (EditorEngine, Vec<Uuid>) {
        let mut engine = EditorEngine::new();
        let ids = (0..n).map(|_| engine.add_layer()).collect();
        (engine, ids)
    }

    #[test]
    fn test_add_layer_selects_the_new_layer() {
        let (engine, ids) = engine_with(2);
        assert!(engine.selection().is_single());
        assert!(engine.selection().contains(ids[1]));
    }

    #[test]
    fn test_undo_restores_pre_mutation_state() {
        let (mut engine, ids) = engine_with(1);
        engine.update_layers(&ids, &[LayerEdit::Position { x: 500.0, y: 500.0 }]);
        assert_eq!(engine.layers()[0].x, 500.0);

        assert!(engine.undo());
        assert_eq!(engine.layers()[0].x, 100.0);
        // Selection does not survive time travel.
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn test_n_mutations_then_n_undos_returns_to_start() {
        let mut engine = EditorEngine::new();
        for _ in 0..5 {
            engine.add_layer();
        }
        for _ in 0..5 {
            assert!(engine.undo());
        }
        assert!(engine.layers().is_empty());
        assert!(!engine.undo());
    }

    #[test]
    fn test_redo_mirrors_undo() {
        let (mut engine, _) = engine_with(2);
        assert!(engine.undo());
        assert_eq!(engine.layers().len(), 1);
        assert!(engine.redo());
        assert_eq!(engine.layers().len(), 2);
        assert!(!engine.redo());
    }

    #[test]
    fn test_replay_does_not_grow_history() {
        let (mut engine, _) = engine_with(3);
        let len = engine.history_len();
        engine.undo();
        engine.redo();
        assert_eq!(engine.history_len(), len);
    }

    #[test]
    fn test_delete_prunes_selection() {
        let (mut engine, ids) = engine_with(3);
        engine.select(ids[0], false);
        engine.select(ids[1], true);

        engine.delete_layers(&[ids[0]]);
        assert!(!engine.selection().contains(ids[0]));
        assert!(engine.selection().contains(ids[1]));
        assert_eq!(engine.layers().len(), 2);
    }

    #[test]
    fn test_duplicate_selects_only_the_clone() {
        let (mut engine, ids) = engine_with(1);
        let copy = engine.duplicate(ids[0]).unwrap();
        assert_eq!(engine.selection().only(), Some(copy));

        let source = engine.layers().iter().find(|l| l.id == ids[0]).unwrap();
        let clone = engine.layers().iter().find(|l| l.id == copy).unwrap();
        assert_eq!(clone.x, source.x + 20.0);
        assert_eq!(clone.y, source.y + 20.0);
    }

    #[test]
    fn test_reorder_needs_single_selection() {
        let (mut engine, ids) = engine_with(2);
        engine.select(ids[0], false);
        engine.select(ids[1], true);
        assert_eq!(
            engine.reorder(Direction::Up),
            Err(EngineError::ReorderRequiresSingle)
        );
    }

    #[test]
    fn test_reorder_boundary_no_op_records_nothing() {
        let (mut engine, ids) = engine_with(2);
        engine.select(ids[1], false);
        let len = engine.history_len();
        assert!(!engine.reorder(Direction::Up).unwrap());
        assert_eq!(engine.history_len(), len);
    }

    #[test]
    fn test_align_horizontal_sets_mean_y() {
        let (mut engine, ids) = engine_with(3);
        for (i, y) in [10.0, 20.0, 30.0].iter().enumerate() {
            engine.update_layers(&[ids[i]], &[LayerEdit::Position { x: i as f32, y: *y }]);
        }
        engine.select(ids[0], false);
        engine.select(ids[1], true);
        engine.select(ids[2], true);

        engine.align_horizontal().unwrap();
        for layer in engine.layers() {
            assert_eq!(layer.y, 20.0);
        }
    }

    #[test]
    fn test_align_needs_two_layers() {
        let (mut engine, ids) = engine_with(1);
        engine.select(ids[0], false);
        assert_eq!(
            engine.align_horizontal(),
            Err(EngineError::NotEnoughSelected { required: 2, got: 1 })
        );
    }

    #[test]
    fn test_distribute_evenly_along_x() {
        let (mut engine, ids) = engine_with(3);
        for (i, x) in [0.0, 10.0, 100.0].iter().enumerate() {
            engine.update_layers(&[ids[i]], &[LayerEdit::Position { x: *x, y: 0.0 }]);
        }
        for (i, id) in ids.iter().enumerate() {
            engine.select(*id, i > 0);
        }

        engine.distribute(Axis::Horizontal).unwrap();
        let mut xs: Vec<f32> = engine.layers().iter().map(|l| l.x).collect();
        xs.sort_by(f32::total_cmp);
        assert_eq!(xs, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_style_edit_updates_the_template() {
        let (mut engine, ids) = engine_with(1);
        engine.update_layers(&ids, &[LayerEdit::Typography(TypographyEdit::FontSize(72.0))]);
        assert_eq!(engine.template().typography.font_size, 72.0);

        // The next layer inherits the restyle.
        let next = engine.add_layer();
        let layer = engine.layers().iter().find(|l| l.id == next).unwrap();
        assert_eq!(layer.style.font_size, 72.0);
    }

    #[test]
    fn test_position_edit_leaves_template_alone() {
        let (mut engine, ids) = engine_with(1);
        let before = engine.template().clone();
        engine.update_layers(&ids, &[LayerEdit::Position { x: 1.0, y: 2.0 }]);
        assert_eq!(*engine.template(), before);
    }

    #[test]
    fn test_drag_gesture_moves_unlocked_only() {
        let (mut engine, ids) = engine_with(1);
        engine.apply_gesture(Gesture::DragEnd { id: ids[0], x: 7.0, y: 9.0 });
        assert_eq!((engine.layers()[0].x, engine.layers()[0].y), (7.0, 9.0));

        engine.toggle_lock_selected();
        engine.apply_gesture(Gesture::DragEnd { id: ids[0], x: 0.0, y: 0.0 });
        assert_eq!((engine.layers()[0].x, engine.layers()[0].y), (7.0, 9.0));
    }

    #[test]
    fn test_transform_gesture_applies_full_report() {
        let (mut engine, ids) = engine_with(1);
        engine.apply_gesture(Gesture::TransformEnd {
            id: ids[0],
            x: 1.0,
            y: 2.0,
            rotation: 45.0,
            scale_x: 2.0,
            scale_y: 0.5,
        });
        let layer = &engine.layers()[0];
        assert_eq!(layer.rotation, 45.0);
        assert_eq!((layer.scale_x, layer.scale_y), (2.0, 0.5));
    }

    #[test]
    fn test_reset_discards_everything() {
        let (mut engine, _) = engine_with(3);
        engine.reset();
        assert!(engine.layers().is_empty());
        assert!(!engine.can_undo());
        assert!(engine.selection().is_empty());
    }
}
