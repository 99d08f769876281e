//! Layer edit commands.
//!
//! The source of truth for "what can change on a layer" is this tagged
//! command set, grouped by property family. There is no string-keyed
//! property bag: an unknown property cannot be expressed, and every
//! `apply` clamps into the model invariants (opacity in `[0, 1]`,
//! radius and paragraph width positive, blur non-negative).

use serde::{Deserialize, Serialize};

use crate::{
    clamp_unit, Decoration, FontStyle, FontWeight, TextAlign, TextLayer, WarpPath,
    MIN_PARAGRAPH_WIDTH, MIN_WARP_RADIUS,
};

/// Typography property edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypographyEdit {
    FontFamily(String),
    FontSize(f32),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    Color(String),
    StrokeColor(String),
    StrokeWidth(f32),
    Align(TextAlign),
    LineHeight(f32),
    LetterSpacing(f32),
    Decoration(Decoration),
    Opacity(f32),
}

/// Drop-shadow property edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShadowEdit {
    Color(String),
    Blur(f32),
    OffsetX(f32),
    OffsetY(f32),
}

/// Affine transform edits (position edits live in [`LayerEdit::Position`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TransformEdit {
    Rotation(f32),
    ScaleX(f32),
    ScaleY(f32),
}

/// Warp sub-record edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WarpEdit {
    Enabled(bool),
    Path(WarpPath),
    Radius(f32),
    Angle(f32),
    Spacing(f32),
    Descriptor(Option<String>),
}

/// Spacing-hint sub-record edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HintEdit {
    Enabled(bool),
    Color(String),
    Opacity(f32),
}

/// One edit to one property family of a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LayerEdit {
    Content(String),
    Position { x: f32, y: f32 },
    ParagraphWidth(f32),
    Typography(TypographyEdit),
    Shadow(ShadowEdit),
    Transform(TransformEdit),
    Warp(WarpEdit),
    Hint(HintEdit),
}

impl LayerEdit {
    /// Apply this edit to a layer, clamping into model invariants.
    pub fn apply(&self, layer: &mut TextLayer) {
        match self {
            LayerEdit::Content(text) => layer.content = text.clone(),
            LayerEdit::Position { x, y } => {
                layer.x = *x;
                layer.y = *y;
            }
            LayerEdit::ParagraphWidth(w) => {
                layer.paragraph_width = w.max(MIN_PARAGRAPH_WIDTH);
            }
            LayerEdit::Typography(edit) => edit.apply(layer),
            LayerEdit::Shadow(edit) => edit.apply(layer),
            LayerEdit::Transform(edit) => edit.apply(layer),
            LayerEdit::Warp(edit) => edit.apply(layer),
            LayerEdit::Hint(edit) => edit.apply(layer),
        }
    }
}

impl TypographyEdit {
    fn apply(&self, layer: &mut TextLayer) {
        let style = &mut layer.style;
        match self {
            TypographyEdit::FontFamily(name) => style.font_family = name.clone(),
            TypographyEdit::FontSize(size) => style.font_size = size.max(1.0),
            TypographyEdit::FontWeight(weight) => style.font_weight = *weight,
            TypographyEdit::FontStyle(font_style) => style.font_style = *font_style,
            TypographyEdit::Color(color) => style.color = color.clone(),
            TypographyEdit::StrokeColor(color) => style.stroke_color = color.clone(),
            TypographyEdit::StrokeWidth(width) => style.stroke_width = width.max(0.0),
            TypographyEdit::Align(align) => style.align = *align,
            TypographyEdit::LineHeight(height) => style.line_height = height.max(0.0),
            TypographyEdit::LetterSpacing(spacing) => style.letter_spacing = *spacing,
            TypographyEdit::Decoration(decoration) => style.decoration = *decoration,
            TypographyEdit::Opacity(opacity) => style.opacity = clamp_unit(*opacity),
        }
    }
}

impl ShadowEdit {
    fn apply(&self, layer: &mut TextLayer) {
        let shadow = &mut layer.shadow;
        match self {
            ShadowEdit::Color(color) => shadow.color = color.clone(),
            ShadowEdit::Blur(blur) => shadow.blur = blur.max(0.0),
            ShadowEdit::OffsetX(dx) => shadow.offset_x = *dx,
            ShadowEdit::OffsetY(dy) => shadow.offset_y = *dy,
        }
    }
}

impl TransformEdit {
    fn apply(&self, layer: &mut TextLayer) {
        match self {
            TransformEdit::Rotation(degrees) => layer.rotation = *degrees,
            TransformEdit::ScaleX(sx) => layer.scale_x = *sx,
            TransformEdit::ScaleY(sy) => layer.scale_y = *sy,
        }
    }
}

impl WarpEdit {
    fn apply(&self, layer: &mut TextLayer) {
        let warp = &mut layer.warp;
        match self {
            WarpEdit::Enabled(enabled) => warp.enabled = *enabled,
            WarpEdit::Path(path) => warp.path = *path,
            WarpEdit::Radius(radius) => warp.radius = radius.max(MIN_WARP_RADIUS),
            WarpEdit::Angle(angle) => warp.angle = *angle,
            WarpEdit::Spacing(spacing) => warp.spacing = spacing.max(0.0),
            WarpEdit::Descriptor(descriptor) => warp.descriptor = descriptor.clone(),
        }
    }
}

impl HintEdit {
    fn apply(&self, layer: &mut TextLayer) {
        let hint = &mut layer.hint;
        match self {
            HintEdit::Enabled(enabled) => hint.enabled = *enabled,
            HintEdit::Color(color) => hint.color = color.clone(),
            HintEdit::Opacity(opacity) => hint.opacity = clamp_unit(*opacity),
        }
    }
}
