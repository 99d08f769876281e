//! Warp-path descriptor authoring.
//!
//! A descriptor is a serializable sequence of move/line/arc primitives
//! that traces the same curve [`warp_point`](crate::warp_point) places
//! characters on. It is computed once when warp parameters change and
//! cached on the layer, instead of re-deriving the path per character.

use serde::{Deserialize, Serialize};

use overtype_core::{Warp, WarpPath};

use crate::warp::warp_point;

/// Sample count for path families without a closed-form primitive.
const POLYLINE_SAMPLES: u32 = 64;

/// One path primitive. Coordinates are relative to the layer anchor;
/// arc angles are degrees from the upward vertical, matching the warp
/// evaluation convention.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PathCommand {
    Move { x: f32, y: f32 },
    Line { x: f32, y: f32 },
    Arc { cx: f32, cy: f32, radius: f32, start: f32, end: f32 },
}

/// Build the descriptor for a path family at the given radius/angle.
///
/// Arc and circle emit a single arc primitive; every other family is
/// sampled into a polyline from the identical per-character formula, so
/// descriptor and character placement can never disagree.
pub fn path_descriptor(path: WarpPath, radius: f32, angle: f32) -> Vec<PathCommand> {
    match path {
        WarpPath::Arc | WarpPath::Custom => vec![PathCommand::Arc {
            cx: 0.0,
            cy: 0.0,
            radius,
            start: -angle / 2.0,
            end: angle / 2.0,
        }],
        WarpPath::Circle => vec![PathCommand::Arc {
            cx: 0.0,
            cy: 0.0,
            radius,
            start: 0.0,
            end: 360.0,
        }],
        WarpPath::Wave | WarpPath::Spiral | WarpPath::Zigzag | WarpPath::Heart | WarpPath::Star => {
            sampled(path, radius, angle)
        }
    }
}

/// Serialize a descriptor to its cached string form.
pub fn encode_descriptor(commands: &[PathCommand]) -> String {
    // Vec<PathCommand> serialization cannot fail.
    serde_json::to_string(commands).unwrap_or_default()
}

/// Parse a cached descriptor string. Returns `None` on malformed input.
pub fn decode_descriptor(encoded: &str) -> Option<Vec<PathCommand>> {
    serde_json::from_str(encoded).ok()
}

fn sampled(path: WarpPath, radius: f32, angle: f32) -> Vec<PathCommand> {
    let probe = Warp {
        enabled: true,
        path,
        radius,
        angle,
        spacing: 1.0,
        descriptor: None,
    };

    let mut commands = Vec::with_capacity(POLYLINE_SAMPLES as usize + 1);
    for i in 0..=POLYLINE_SAMPLES {
        let t = i as f32 / POLYLINE_SAMPLES as f32;
        let p = warp_point(t, &probe);
        if i == 0 {
            commands.push(PathCommand::Move { x: p.x, y: p.y });
        } else {
            commands.push(PathCommand::Line { x: p.x, y: p.y });
        }
    }
    commands
}
