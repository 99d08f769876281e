//! Layer → renderer bridge.
//!
//! Translates the layer collection into the ordered draw-instruction
//! list the external rendering surface consumes, plus spacing-hint
//! overlays. The surface itself (painting, gestures, export) lives
//! outside the engine.

pub mod bridge;

pub use bridge::{build_draw_list, build_overlays, DrawInstruction, HintOverlay};
