use std::path::Path;

use anyhow::Context as _;

use crate::{
    composition::model::SelectedLayer,
    editor::drag::PointerEvent,
    foundation::error::PinResult,
    geometry::orientation::Orientation,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
/// One UI interaction with the editor.
pub enum EditorEvent {
    /// Click in the layer list.
    SelectLayer { layer: SelectedLayer },
    /// Pointer input on the drag surface.
    Pointer { event: PointerEvent },
    /// Typing in the text layer's inline input.
    SetText { content: String },
    /// Delete button on the text layer.
    DeleteText,
    FontSize { value: f64 },
    TextColor { color: String },
    Orientation { orientation: Orientation },
    /// Size picker; `"original"` or a preset name.
    Size { preset: String },
    BackgroundColor { color: String },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered list of editor events, replayed one at a time.
pub struct EditorScript {
    pub events: Vec<EditorEvent>,
}

impl EditorScript {
    pub fn from_json_str(s: &str) -> PinResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PinResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read editor script '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
