use crate::{
    foundation::config::{CanvasDefaults, TextDefaults},
    foundation::core::Point,
    geometry::{orientation::Orientation, presets::SizePreset},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Layer currently targeted by the option panel.
pub enum SelectedLayer {
    Text,
    #[default]
    Canvas,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Movable text overlay.
///
/// Empty `content` means the layer was deleted: it is observably the same as
/// having no text layer at all, and `position` carries no meaning then.
pub struct TextLayer {
    /// Text content; may be empty.
    pub content: String,
    /// Top-left offset inside the canvas, in display pixels.
    pub position: Point,
    /// Font size in display pixels. Not range-checked.
    pub font_size: f64,
    /// Text color as entered (hex).
    pub color: String,
}

impl TextLayer {
    /// A new layer at the canvas origin with the configured defaults.
    pub fn with_defaults(defaults: &TextDefaults) -> Self {
        Self {
            content: defaults.content.clone(),
            position: Point::ORIGIN,
            font_size: defaults.font_size,
            color: defaults.color.clone(),
        }
    }

    /// Whether the layer counts as present (non-empty content).
    pub fn is_present(&self) -> bool {
        !self.content.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Canvas attributes. Width is always [`crate::CANVAS_WIDTH`].
pub struct CanvasSpec {
    pub orientation: Orientation,
    pub size_preset: SizePreset,
    /// Derived display height; `0.0` until the first derivation.
    pub height: f64,
    /// Background color as entered (hex).
    pub background_color: String,
}

impl CanvasSpec {
    /// Session-start canvas awaiting its first geometry derivation.
    pub fn unset(defaults: &CanvasDefaults) -> Self {
        Self {
            orientation: defaults.orientation,
            size_preset: SizePreset::Original,
            height: 0.0,
            background_color: defaults.background_color.clone(),
        }
    }

    /// Whether `height` is still the unset sentinel.
    pub fn is_unset(&self) -> bool {
        self.height == 0.0
    }
}
