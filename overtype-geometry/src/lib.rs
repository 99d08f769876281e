//! Pure warp-path geometry for the Overtype engine.
//!
//! Stateless functions mapping a progress value `t ∈ [0, 1]` and a warp
//! record to a position/rotation relative to the layer anchor, the
//! companion path-descriptor authoring used to pre-compute a path once
//! instead of per character, and the spacing/alignment/distribution
//! math behind group geometry operations.
//!
//! All angles cross the API boundary in degrees and are converted to
//! radians exactly once inside each function; identical inputs produce
//! bit-identical outputs.

pub mod path;
pub mod spacing;
pub mod warp;

pub use path::{decode_descriptor, encode_descriptor, path_descriptor, PathCommand};
pub use spacing::{
    alignment_target, distribute_targets, spacing_hints, Axis, GapAnnotation, SpacingHints,
};
pub use warp::{warp_point, WarpPoint};
