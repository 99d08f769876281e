//! Core data model for the Overtype layer engine.
//!
//! A [`TextLayer`] is one editable piece of styled text placed over a
//! raster image. The `Vec<TextLayer>` order is paint order: index 0 is
//! bottom-most. All invariant clamping (opacity ranges, positive radius)
//! lives here so no collection can hold an out-of-range value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod edit;

pub use edit::{HintEdit, LayerEdit, ShadowEdit, TransformEdit, TypographyEdit, WarpEdit};

/// Smallest radius a warp path may carry. Edits below this are clamped up.
pub const MIN_WARP_RADIUS: f32 = 1.0;

/// Smallest paragraph wrap width.
pub const MIN_PARAGRAPH_WIDTH: f32 = 1.0;

/// Position offset applied to duplicated layers, both axes.
pub const DUPLICATE_OFFSET: f32 = 20.0;

/// Clamp an opacity-like value into `[0, 1]`.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

// ── Token enums ─────────────────────────────────────────────────────

/// Font weight token (CSS-style keyword set, not a numeric axis).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Bold,
}

/// Font style token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Horizontal text alignment inside the paragraph box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Text decoration token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

/// Parametric path family a warped layer follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarpPath {
    #[default]
    Arc,
    Circle,
    Wave,
    Spiral,
    Zigzag,
    Heart,
    Star,
    Custom,
}

// ── Sub-records ─────────────────────────────────────────────────────

/// Typography attributes of a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    /// Fill color, CSS notation (e.g. `"#ffffff"`).
    pub color: String,
    pub stroke_color: String,
    pub stroke_width: f32,
    pub align: TextAlign,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub decoration: Decoration,
    /// Always in `[0, 1]`.
    pub opacity: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".into(),
            font_size: 32.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            color: "#ffffff".into(),
            stroke_color: "#000000".into(),
            stroke_width: 0.0,
            align: TextAlign::Center,
            line_height: 1.2,
            letter_spacing: 0.0,
            decoration: Decoration::None,
            opacity: 1.0,
        }
    }
}

/// Drop shadow attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    /// Blur radius, never negative.
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: "#000000".into(),
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Warp state: whether the layer's characters follow a parametric path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warp {
    pub enabled: bool,
    pub path: WarpPath,
    /// Path radius in image-space pixels, always `> 0`.
    pub radius: f32,
    /// Path angle in degrees. Meaning varies per path family.
    pub angle: f32,
    /// Per-character spacing multiplier along the path.
    pub spacing: f32,
    /// Cached serialized path descriptor, rebuilt when warp params change.
    #[serde(default)]
    pub descriptor: Option<String>,
}

impl Default for Warp {
    fn default() -> Self {
        Self {
            enabled: false,
            path: WarpPath::Arc,
            radius: 100.0,
            angle: 120.0,
            spacing: 1.0,
            descriptor: None,
        }
    }
}

/// Spacing-hint overlay state (gap annotations between layers).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingHint {
    pub enabled: bool,
    pub color: String,
    /// Always in `[0, 1]`.
    pub opacity: f32,
}

impl Default for SpacingHint {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#00e0ff".into(),
            opacity: 0.8,
        }
    }
}

// ── TextLayer ───────────────────────────────────────────────────────

/// One editable text layer over the image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    /// Stable identity, assigned at creation, never reused.
    pub id: Uuid,
    /// Anchor position in image-space coordinates.
    pub x: f32,
    pub y: f32,
    /// Content, may contain line breaks.
    pub content: String,
    pub style: Typography,
    pub shadow: Shadow,
    /// Wrap boundary, always `> 0`.
    pub paragraph_width: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub locked: bool,
    pub warp: Warp,
    pub hint: SpacingHint,
}

impl TextLayer {
    /// Create a layer with deterministic defaults, seeded from a style
    /// template (the "last used style" record).
    pub fn from_template(template: &StyleTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: 100.0,
            y: 100.0,
            content: "New text".into(),
            style: template.typography.clone(),
            shadow: template.shadow.clone(),
            paragraph_width: template.paragraph_width.max(MIN_PARAGRAPH_WIDTH),
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            locked: false,
            warp: template.warp.clone(),
            hint: template.hint.clone(),
        }
    }

    /// Clone this layer into a new, unlocked layer with a fresh id,
    /// offset by [`DUPLICATE_OFFSET`] on both axes.
    pub fn duplicated(&self) -> Self {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        copy.locked = false;
        copy
    }
}

/// Non-persisted template for the next layer creation.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTemplate {
    pub typography: Typography,
    pub shadow: Shadow,
    pub warp: Warp,
    pub hint: SpacingHint,
    pub paragraph_width: f32,
}

impl Default for StyleTemplate {
    fn default() -> Self {
        Self {
            typography: Typography::default(),
            shadow: Shadow::default(),
            warp: Warp::default(),
            hint: SpacingHint::default(),
            paragraph_width: 300.0,
        }
    }
}

impl StyleTemplate {
    /// Capture the style of an existing layer as the new template.
    pub fn from_layer(layer: &TextLayer) -> Self {
        Self {
            typography: layer.style.clone(),
            shadow: layer.shadow.clone(),
            warp: layer.warp.clone(),
            hint: layer.hint.clone(),
            paragraph_width: layer.paragraph_width,
        }
    }
}

// ── Image identity ──────────────────────────────────────────────────

/// Identity of the raster image a session edits. Autosave restore is
/// gated on field-wise equality with the stored identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIdentity {
    pub url: String,
    pub width: u32,
    pub height: u32,
}
