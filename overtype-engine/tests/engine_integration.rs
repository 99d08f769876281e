//! End-to-end tests over the full engine: store + history + selection
//! + persistence, exercised the way a host application drives them.

use overtype_core::{ImageIdentity, LayerEdit, TypographyEdit};
use overtype_engine::{EditorEngine, EditorSession, EngineError, Gesture, HISTORY_CAP};
use overtype_geometry::Axis;
use overtype_persist::MemoryStore;

fn image() -> ImageIdentity {
    ImageIdentity {
        url: "blob:test".into(),
        width: 1920,
        height: 1080,
    }
}

fn session() -> EditorSession<MemoryStore> {
    EditorSession::open(
        image(),
        MemoryStore::new(),
        Box::new(|| "2026-08-29T00:00:00Z".into()),
    )
}

#[test]
fn mutations_then_matching_undos_restore_the_initial_state() {
    let mut engine = EditorEngine::new();

    let a = engine.add_layer();
    let b = engine.add_layer();
    engine.update_layers(&[a], &[LayerEdit::Position { x: 1.0, y: 1.0 }]);
    engine.duplicate(b).unwrap();
    engine.delete_layers(&[a]);

    for _ in 0..5 {
        assert!(engine.undo());
    }
    assert!(engine.layers().is_empty());
    assert!(!engine.can_undo());
}

#[test]
fn history_never_exceeds_the_cap() {
    let mut engine = EditorEngine::new();
    for _ in 0..HISTORY_CAP * 2 {
        engine.add_layer();
    }
    assert_eq!(engine.history_len(), HISTORY_CAP);

    // The newest entry stays reachable and undo still walks backwards.
    assert!(engine.undo());
    assert_eq!(engine.layers().len(), HISTORY_CAP * 2 - 1);
}

#[test]
fn undo_and_redo_at_the_bounds_are_no_ops() {
    let mut engine = EditorEngine::new();
    assert!(!engine.undo());
    assert!(!engine.redo());

    engine.add_layer();
    assert!(!engine.redo());
    assert!(engine.undo());
    assert!(!engine.undo());
}

#[test]
fn a_new_branch_discards_the_redo_tail() {
    let mut engine = EditorEngine::new();
    engine.add_layer();
    engine.add_layer();
    engine.undo();

    engine.add_layer();
    assert!(!engine.can_redo());
    assert_eq!(engine.layers().len(), 2);
}

#[test]
fn group_lock_toggle_is_all_or_nothing() {
    let mut engine = EditorEngine::new();
    let a = engine.add_layer();
    let b = engine.add_layer();

    // Lock one layer only.
    engine.select(a, false);
    engine.toggle_lock_selected();

    // Mixed selection → everything locks.
    engine.select(a, false);
    engine.select(b, true);
    engine.toggle_lock_selected();
    assert!(engine.layers().iter().all(|l| l.locked));

    // Uniformly locked selection → everything unlocks.
    engine.toggle_lock_selected();
    assert!(engine.layers().iter().all(|l| !l.locked));
}

#[test]
fn distribute_and_align_follow_the_documented_math() {
    let mut engine = EditorEngine::new();
    let ids: Vec<_> = (0..3).map(|_| engine.add_layer()).collect();
    let coords = [(0.0, 10.0), (10.0, 20.0), (100.0, 30.0)];
    for (id, (x, y)) in ids.iter().zip(coords) {
        engine.update_layers(&[*id], &[LayerEdit::Position { x, y }]);
    }
    for (i, id) in ids.iter().enumerate() {
        engine.select(*id, i > 0);
    }

    engine.distribute(Axis::Horizontal).unwrap();
    let xs: Vec<f32> = engine.layers().iter().map(|l| l.x).collect();
    assert_eq!(xs, vec![0.0, 50.0, 100.0]);

    engine.align_horizontal().unwrap();
    assert!(engine.layers().iter().all(|l| l.y == 20.0));
}

#[test]
fn distribute_needs_three_selected() {
    let mut engine = EditorEngine::new();
    let a = engine.add_layer();
    let b = engine.add_layer();
    engine.select(a, false);
    engine.select(b, true);
    assert_eq!(
        engine.distribute(Axis::Horizontal),
        Err(EngineError::NotEnoughSelected { required: 3, got: 2 })
    );
}

#[test]
fn deleting_a_selected_layer_prunes_exactly_that_id() {
    let mut engine = EditorEngine::new();
    let a = engine.add_layer();
    let b = engine.add_layer();
    let c = engine.add_layer();
    engine.select(a, false);
    engine.select(b, true);
    engine.select(c, true);

    engine.delete_layers(&[b]);
    assert!(engine.selection().contains(a));
    assert!(!engine.selection().contains(b));
    assert!(engine.selection().contains(c));
}

#[test]
fn click_gestures_drive_single_and_multi_select() {
    let mut engine = EditorEngine::new();
    let a = engine.add_layer();
    let b = engine.add_layer();

    engine.apply_gesture(Gesture::Click { id: a, multi: false });
    assert_eq!(engine.selection().only(), Some(a));

    engine.apply_gesture(Gesture::Click { id: b, multi: true });
    assert!(engine.selection().is_multi());

    engine.apply_gesture(Gesture::Click { id: b, multi: true });
    assert_eq!(engine.selection().only(), Some(a));
}

#[test]
fn autosave_round_trips_layers_history_and_cursor() {
    let mut s = session();
    s.engine_mut().add_layer();
    let id = s.engine_mut().add_layer();
    s.engine_mut()
        .update_layers(&[id], &[LayerEdit::Typography(TypographyEdit::Color("#123456".into()))]);
    s.engine_mut().undo();
    s.save_now();

    let history_len = s.engine().history_len();
    let layers = s.engine().layers().to_vec();

    s.switch_image(image());
    assert_eq!(s.engine().layers(), &layers[..]);
    assert_eq!(s.engine().history_len(), history_len);
    // The cursor survived: redo walks forward again.
    assert!(s.engine().can_redo());
}

#[test]
fn autosave_for_a_different_image_is_discarded() {
    let mut s = session();
    s.engine_mut().add_layer();
    s.save_now();

    s.switch_image(ImageIdentity {
        url: "blob:test".into(),
        width: 1920,
        height: 1079,
    });
    assert!(s.engine().layers().is_empty());
    assert!(!s.engine().can_undo());
}

#[test]
fn debounce_writes_once_for_a_burst_of_edits() {
    let mut s = session();
    let mut flushes = 0;
    for tick in 0..10u64 {
        s.engine_mut().add_layer();
        if s.tick(tick) {
            flushes += 1;
        }
    }
    // Every tick restarts the window, so nothing flushed during the burst.
    assert_eq!(flushes, 0);
    assert!(s.tick(11));
    assert!(!s.tick(12));
}
