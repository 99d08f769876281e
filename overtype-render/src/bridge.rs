//! Draw-instruction generation.
//!
//! ```text
//!  LayerStore state ──▸ build_draw_list ──▸ Vec<DrawInstruction> ──▸ surface
//!                  └──▸ build_overlays  ──▸ Vec<HintOverlay>     ──▸ surface
//! ```
//!
//! Collection order is paint order and is preserved: instruction `i`
//! paints above instruction `i − 1`. A warp-enabled layer becomes one
//! instruction per character, placed by the geometry library; straight
//! layers become a single per-run instruction.

use overtype_core::{Shadow, TextLayer, Typography};
use overtype_geometry::{spacing_hints, warp_point, Axis, GapAnnotation};
use uuid::Uuid;

/// One unit of work for the rendering surface, in absolute image-space
/// coordinates with full style attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawInstruction {
    /// A whole glyph run (straight, non-warped layer).
    Run {
        layer_id: Uuid,
        x: f32,
        y: f32,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
        content: String,
        paragraph_width: f32,
        style: Typography,
        shadow: Shadow,
    },
    /// A single character on a warp path.
    Glyph {
        layer_id: Uuid,
        x: f32,
        y: f32,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
        character: char,
        style: Typography,
        shadow: Shadow,
    },
}

/// A spacing-hint annotation ready to paint: geometry plus the hint
/// style of the layer the gap starts from.
#[derive(Clone, Debug, PartialEq)]
pub struct HintOverlay {
    pub axis: Axis,
    pub annotation: GapAnnotation,
    pub color: String,
    pub opacity: f32,
}

/// Build the ordered draw list for the whole collection.
pub fn build_draw_list(layers: &[TextLayer]) -> Vec<DrawInstruction> {
    let mut instructions = Vec::with_capacity(layers.len());
    for layer in layers {
        if layer.warp.enabled {
            push_warped(&mut instructions, layer);
        } else {
            instructions.push(DrawInstruction::Run {
                layer_id: layer.id,
                x: layer.x,
                y: layer.y,
                rotation: layer.rotation,
                scale_x: layer.scale_x,
                scale_y: layer.scale_y,
                content: layer.content.clone(),
                paragraph_width: layer.paragraph_width,
                style: layer.style.clone(),
                shadow: layer.shadow.clone(),
            });
        }
    }
    log::debug!(
        "draw list: {} layers → {} instructions",
        layers.len(),
        instructions.len()
    );
    instructions
}

/// One instruction per character, spaced along the warp path. The warp
/// spacing multiplier stretches the per-character parameter; progress is
/// clamped so oversized spacing parks trailing characters at the path
/// end rather than off it.
fn push_warped(instructions: &mut Vec<DrawInstruction>, layer: &TextLayer) {
    // Line breaks have no meaning on a path.
    let characters: Vec<char> = layer.content.chars().filter(|c| *c != '\n').collect();
    let denominator = (characters.len().saturating_sub(1)).max(1) as f32;

    for (i, character) in characters.into_iter().enumerate() {
        let t = (i as f32 * layer.warp.spacing / denominator).clamp(0.0, 1.0);
        let point = warp_point(t, &layer.warp);
        instructions.push(DrawInstruction::Glyph {
            layer_id: layer.id,
            x: layer.x + point.x,
            y: layer.y + point.y,
            rotation: layer.rotation + point.rotation,
            scale_x: layer.scale_x,
            scale_y: layer.scale_y,
            character,
            style: layer.style.clone(),
            shadow: layer.shadow.clone(),
        });
    }
}

/// Build spacing-hint overlays for every hint-enabled layer pair.
pub fn build_overlays(layers: &[TextLayer]) -> Vec<HintOverlay> {
    let hints = spacing_hints(layers);
    let style_of = |id: Uuid| -> (String, f32) {
        layers
            .iter()
            .find(|l| l.id == id)
            .map(|l| (l.hint.color.clone(), l.hint.opacity))
            .unwrap_or_else(|| ("#00e0ff".into(), 1.0))
    };

    let mut overlays = Vec::with_capacity(hints.horizontal.len() + hints.vertical.len());
    for (axis, annotations) in [
        (Axis::Horizontal, hints.horizontal),
        (Axis::Vertical, hints.vertical),
    ] {
        for annotation in annotations {
            let (color, opacity) = style_of(annotation.from);
            overlays.push(HintOverlay {
                axis,
                annotation,
                color,
                opacity,
            });
        }
    }
    overlays
}
